//! Infrastructure error types.
//!
//! Adapter-level failures during an operation surface through the port
//! contracts as `WorkflowError::Repository`; this type covers what
//! happens before an adapter exists: connecting and configuring.
//!
//! # Examples
//!
//! ```
//! use filmotek_infrastructure::errors::InfraError;
//!
//! let error = InfraError::connection("connection refused");
//! assert!(error.is_connection());
//! ```

use thiserror::Error;

// =============================================================================
// InfraError
// =============================================================================

/// Error types for infrastructure setup operations.
#[derive(Debug, Clone, Error)]
pub enum InfraError {
    /// A connection to the database failed.
    #[error("Connection to database failed: {message}")]
    Connection {
        /// Detailed error message.
        message: String,
    },

    /// The configuration was invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message.
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl InfraError {
    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl InfraError {
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
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
    fn connection_error_formats_message() {
        let error = InfraError::connection("refused");
        assert!(error.is_connection());
        assert!(error.to_string().contains("refused"));
    }

    #[rstest]
    fn configuration_error_formats_message() {
        let error = InfraError::configuration("empty url");
        assert!(error.is_configuration());
        assert!(error.to_string().contains("empty url"));
    }
}
