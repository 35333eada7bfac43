//! Film identifier value object.

use std::fmt;
use std::str::FromStr;

use crate::common::ValidationError;

// =============================================================================
// FilmId
// =============================================================================

/// Unique identifier for a film.
///
/// Identifiers are assigned by the store on creation (an in-memory
/// sequence or a database auto-increment column) and are immutable
/// afterwards. `FilmId` wraps the raw integer to prevent accidental
/// mixing with other integer identifiers in the domain.
///
/// # Examples
///
/// ```
/// use filmotek_domain::film::FilmId;
///
/// let identifier = FilmId::new(42);
/// assert_eq!(identifier.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmId(i64);

impl FilmId {
    /// Creates a `FilmId` from a raw integer value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for FilmId {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        string
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("film_id", "integer identifier"))
    }
}

impl From<i64> for FilmId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_wraps_value() {
        let identifier = FilmId::new(7);
        assert_eq!(identifier.value(), 7);
    }

    #[rstest]
    fn display_format() {
        assert_eq!(format!("{}", FilmId::new(123)), "123");
    }

    #[rstest]
    fn from_str_valid() {
        let identifier = "42".parse::<FilmId>().unwrap();
        assert_eq!(identifier, FilmId::new(42));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12.5")]
    fn from_str_invalid(#[case] input: &str) {
        assert!(input.parse::<FilmId>().is_err());
    }

    #[rstest]
    fn ordering_follows_value() {
        assert!(FilmId::new(1) < FilmId::new(2));
    }
}
