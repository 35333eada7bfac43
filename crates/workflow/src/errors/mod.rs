//! Error types for the workflow layer.
//!
//! # Error Categories
//!
//! - [`WorkflowError::Validation`]: invalid input, rejected before any
//!   mutation
//! - [`WorkflowError::NotFound`]: entity not found in storage
//! - [`WorkflowError::Conflict`]: state conflicts
//! - [`WorkflowError::Repository`]: storage operation failures
//!
//! # Examples
//!
//! ```
//! use filmotek_workflow::errors::WorkflowError;
//!
//! let error = WorkflowError::not_found("Film", "42");
//! assert!(error.is_not_found());
//!
//! let error = WorkflowError::repository("create", "connection timeout");
//! assert!(error.is_repository());
//! ```

use std::error::Error;
use std::fmt;

use filmotek_domain::common::ValidationError;

// =============================================================================
// WorkflowError
// =============================================================================

/// Error types for workflow operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Input validation failed; nothing was mutated.
    Validation(ValidationError),

    /// The requested entity was not found.
    NotFound {
        /// The type of entity that was not found (e.g., "Film", "User").
        entity_type: String,
        /// The identifier used to look up the entity.
        identifier: String,
    },

    /// A conflict occurred (e.g., duplicate entry).
    Conflict {
        /// The reason for the conflict.
        reason: String,
    },

    /// A storage operation failed.
    Repository {
        /// The operation that failed (e.g., "create", "find_by_id").
        operation: String,
        /// Detailed error message.
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl WorkflowError {
    /// Creates a not found error.
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Creates a repository error.
    pub fn repository(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Repository {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    #[must_use]
    pub const fn is_repository(&self) -> bool {
        matches!(self, Self::Repository { .. })
    }
}

// =============================================================================
// Display / Error Implementations
// =============================================================================

impl fmt::Display for WorkflowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => write!(formatter, "Validation error: {}", error),
            Self::NotFound {
                entity_type,
                identifier,
            } => {
                write!(
                    formatter,
                    "{} with identifier '{}' not found",
                    entity_type, identifier
                )
            }
            Self::Conflict { reason } => write!(formatter, "Conflict: {}", reason),
            Self::Repository { operation, message } => {
                write!(
                    formatter,
                    "Repository operation '{}' failed: {}",
                    operation, message
                )
            }
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
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
    fn not_found_carries_entity_and_identifier() {
        let error = WorkflowError::not_found("Film", "42");

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Film with identifier '42' not found");
    }

    #[rstest]
    fn conflict_carries_reason() {
        let error = WorkflowError::conflict("duplicate login");

        assert!(error.is_conflict());
        assert!(error.to_string().contains("duplicate login"));
    }

    #[rstest]
    fn repository_carries_operation() {
        let error = WorkflowError::repository("create", "timeout");

        assert!(error.is_repository());
        assert!(error.to_string().contains("'create'"));
        assert!(error.to_string().contains("timeout"));
    }

    #[rstest]
    fn validation_wraps_domain_error() {
        let error: WorkflowError = ValidationError::empty_value("login").into();

        assert!(error.is_validation());
        assert!(error.to_string().contains("'login' must not be empty"));
    }

    #[rstest]
    fn validation_exposes_source() {
        let error: WorkflowError = ValidationError::empty_value("title").into();
        assert!(error.source().is_some());

        let error = WorkflowError::not_found("User", "1");
        assert!(error.source().is_none());
    }
}
