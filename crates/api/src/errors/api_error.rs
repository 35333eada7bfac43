//! The API error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::dto::response::ErrorResponse;

// =============================================================================
// ApiError
// =============================================================================

/// Error type for API handlers.
///
/// The mapping to status codes is the whole error contract of the
/// service: validation failures are 400, unknown identifiers 404,
/// everything else a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity_type} with identifier '{identifier}' not found")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
    },

    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }

    #[must_use]
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> String {
        match self {
            Self::NotFound { entity_type, .. } => {
                format!("{}_NOT_FOUND", entity_type.to_uppercase().replace(' ', "_"))
            }
            Self::ValidationError { .. } => "VALIDATION_ERROR".to_string(),
            Self::Conflict { .. } => "CONFLICT".to_string(),
            Self::InternalError { .. } => "INTERNAL_ERROR".to_string(),
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        if status_code.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::debug!("Request rejected: {}", message);
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status_code, Json(error_response)).into_response()
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
    fn not_found_maps_to_404() {
        let error = ApiError::not_found("Film", "9");

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.error_code(), "FILM_NOT_FOUND");
        assert!(error.is_client_error());
    }

    #[rstest]
    fn validation_maps_to_400() {
        let error = ApiError::validation_field("duration", "must be positive");

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
    }

    #[rstest]
    fn conflict_maps_to_409() {
        let error = ApiError::conflict("edge already exists");

        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[rstest]
    fn internal_maps_to_500() {
        let error = ApiError::internal("storage failure");

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.is_server_error());
    }

    #[rstest]
    fn display_messages_carry_context() {
        let error = ApiError::not_found("User", "3");
        assert_eq!(error.to_string(), "User with identifier '3' not found");

        let error = ApiError::validation("bad payload");
        assert_eq!(error.to_string(), "Validation error: bad payload");
    }
}
