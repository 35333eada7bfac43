//! Validated film attribute value objects.
//!
//! All constructors reject invalid input eagerly, so an attribute value
//! that exists is always well-formed. Constraints mirror the catalog
//! rules: a non-blank title, a bounded description, a release date no
//! earlier than the first public film screening, and a positive running
//! time.

use std::fmt;

use chrono::NaiveDate;

use crate::common::ValidationError;

// =============================================================================
// FilmTitle
// =============================================================================

/// Film title with validation constraints.
///
/// `FilmTitle` ensures that titles are non-blank (after trimming) and at
/// most 255 characters long.
///
/// # Examples
///
/// ```
/// use filmotek_domain::film::FilmTitle;
///
/// let title = FilmTitle::new("Arrival").unwrap();
/// assert_eq!(title.value(), "Arrival");
///
/// assert!(FilmTitle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilmTitle(String);

impl FilmTitle {
    /// Maximum length for a film title.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a new `FilmTitle`, trimming surrounding whitespace.
    ///
    /// Returns an error if the title is blank or exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("title"));
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ValidationError::out_of_range(
                "title",
                1,
                Self::MAX_LENGTH,
                trimmed.chars().count(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmTitle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for FilmTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// FilmDescription
// =============================================================================

/// Film description, at most 200 characters.
///
/// An absent description is modelled as `Option<FilmDescription>` on the
/// aggregate; this type only guards the length bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilmDescription(String);

impl FilmDescription {
    /// Maximum length for a film description.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a new `FilmDescription`.
    ///
    /// Returns an error if the text exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let length = value.chars().count();

        if length > Self::MAX_LENGTH {
            return Err(ValidationError::out_of_range(
                "description",
                0,
                Self::MAX_LENGTH,
                length,
            ));
        }

        Ok(Self(value))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmDescription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// ReleaseDate
// =============================================================================

/// Film release date.
///
/// Dates before 1895-12-28 (the Lumière brothers' first public
/// screening) are rejected: nothing in the catalog can predate cinema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// The earliest admissible release date.
    pub const EARLIEST: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
        Some(date) => date,
        None => panic!("earliest release date is a valid calendar date"),
    };

    /// Creates a new `ReleaseDate`.
    ///
    /// Returns an error for dates before [`Self::EARLIEST`].
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        if date < Self::EARLIEST {
            return Err(ValidationError::constraint_violation(
                "release_date",
                "must not be before 1895-12-28",
            ));
        }

        Ok(Self(date))
    }

    /// Returns the inner date.
    #[must_use]
    pub const fn value(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// RunningTime
// =============================================================================

/// Film running time in minutes, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunningTime(i32);

impl RunningTime {
    /// Creates a new `RunningTime`.
    ///
    /// Returns an error if `minutes` is zero or negative.
    pub fn new(minutes: i32) -> Result<Self, ValidationError> {
        if minutes <= 0 {
            return Err(ValidationError::constraint_violation(
                "duration",
                "must be positive",
            ));
        }

        Ok(Self(minutes))
    }

    /// Returns the running time in minutes.
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RunningTime {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} min", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    mod film_title {
        use super::*;

        #[rstest]
        fn new_valid_title() {
            let title = FilmTitle::new("Stalker").unwrap();
            assert_eq!(title.value(), "Stalker");
        }

        #[rstest]
        fn new_trims_whitespace() {
            let title = FilmTitle::new("  Solaris  ").unwrap();
            assert_eq!(title.value(), "Solaris");
        }

        #[rstest]
        #[case("")]
        #[case("   ")]
        fn new_blank_fails(#[case] input: &str) {
            assert!(FilmTitle::new(input).is_err());
        }

        #[rstest]
        fn new_max_length() {
            let title = FilmTitle::new("a".repeat(FilmTitle::MAX_LENGTH)).unwrap();
            assert_eq!(title.value().len(), FilmTitle::MAX_LENGTH);
        }

        #[rstest]
        fn new_exceeds_max_length_fails() {
            let result = FilmTitle::new("a".repeat(FilmTitle::MAX_LENGTH + 1));
            assert!(result.is_err());
        }

        #[rstest]
        fn error_names_field() {
            let error = FilmTitle::new("").unwrap_err();
            assert_eq!(error.field(), "title");
        }
    }

    mod film_description {
        use super::*;

        #[rstest]
        fn new_valid_description() {
            let description = FilmDescription::new("A story.").unwrap();
            assert_eq!(description.value(), "A story.");
        }

        #[rstest]
        fn new_empty_is_allowed() {
            assert!(FilmDescription::new("").is_ok());
        }

        #[rstest]
        fn new_max_length() {
            let text = "x".repeat(FilmDescription::MAX_LENGTH);
            assert!(FilmDescription::new(text).is_ok());
        }

        #[rstest]
        fn new_exceeds_max_length_fails() {
            let text = "x".repeat(FilmDescription::MAX_LENGTH + 1);
            let error = FilmDescription::new(text).unwrap_err();
            assert_eq!(error.field(), "description");
        }

        #[rstest]
        fn length_is_counted_in_characters() {
            // 200 multi-byte characters are still 200 characters
            let text = "я".repeat(FilmDescription::MAX_LENGTH);
            assert!(FilmDescription::new(text).is_ok());
        }
    }

    mod release_date {
        use super::*;

        #[rstest]
        fn new_valid_date() {
            let release = ReleaseDate::new(date(1972, 3, 20)).unwrap();
            assert_eq!(release.value(), date(1972, 3, 20));
        }

        #[rstest]
        fn new_earliest_date_is_allowed() {
            assert!(ReleaseDate::new(ReleaseDate::EARLIEST).is_ok());
        }

        #[rstest]
        fn new_before_earliest_fails() {
            let result = ReleaseDate::new(date(1895, 12, 27));
            assert!(result.is_err());
        }

        #[rstest]
        fn error_names_field() {
            let error = ReleaseDate::new(date(1800, 1, 1)).unwrap_err();
            assert_eq!(error.field(), "release_date");
        }
    }

    mod running_time {
        use super::*;

        #[rstest]
        fn new_positive_minutes() {
            let running_time = RunningTime::new(161).unwrap();
            assert_eq!(running_time.minutes(), 161);
        }

        #[rstest]
        #[case(0)]
        #[case(-1)]
        #[case(-120)]
        fn new_non_positive_fails(#[case] minutes: i32) {
            assert!(RunningTime::new(minutes).is_err());
        }

        #[rstest]
        fn display_format() {
            let running_time = RunningTime::new(90).unwrap();
            assert_eq!(format!("{}", running_time), "90 min");
        }
    }
}
