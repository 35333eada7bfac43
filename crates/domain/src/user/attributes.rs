//! Validated user attribute value objects.

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::common::ValidationError;

// =============================================================================
// Email
// =============================================================================

/// User email address.
///
/// The check is deliberately shallow (one `@` with non-empty local and
/// domain parts, no whitespace): it matches the registration form, not
/// RFC 5321.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Creates a new `Email`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("email"));
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::constraint_violation(
                "email",
                "must not contain whitespace",
            ));
        }

        let well_formed = matches!(
            trimmed.split_once('@'),
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        );
        if !well_formed {
            return Err(ValidationError::invalid_format(
                "email",
                "address containing '@'",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Login
// =============================================================================

/// User login: non-blank, no whitespace characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Creates a new `Login`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::empty_value("login"));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::constraint_violation(
                "login",
                "must not contain whitespace",
            ));
        }

        Ok(Self(value))
    }

    /// Returns the login as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Birthday
// =============================================================================

/// User birthday; cannot lie in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Creates a new `Birthday`, checked against the current UTC date.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        if date > Utc::now().date_naive() {
            return Err(ValidationError::constraint_violation(
                "birthday",
                "must not be in the future",
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

impl fmt::Display for Birthday {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
