//! User identifier value object.

use std::fmt;
use std::str::FromStr;

use crate::common::ValidationError;

// =============================================================================
// UserId
// =============================================================================

/// Unique identifier for a user.
///
/// Assigned by the store on creation, immutable afterwards. Wrapping the
/// raw integer keeps user and film identifiers from being swapped at an
/// edge-store call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Creates a `UserId` from a raw integer value.
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

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        string
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("user_id", "integer identifier"))
    }
}

impl From<i64> for UserId {
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
        assert_eq!(UserId::new(5).value(), 5);
    }

    #[rstest]
    fn from_str_valid() {
        assert_eq!("9".parse::<UserId>().unwrap(), UserId::new(9));
    }

    #[rstest]
    #[case("")]
    #[case("nine")]
    fn from_str_invalid(#[case] input: &str) {
        assert!(input.parse::<UserId>().is_err());
    }

    #[rstest]
    fn display_format() {
        assert_eq!(format!("{}", UserId::new(17)), "17");
    }
}
