//! Error conversion implementations.
//!
//! `From` implementations funneling domain and workflow errors into
//! [`ApiError`], so handlers can use `?` on both.

use filmotek_domain::common::ValidationError;
use filmotek_workflow::errors::WorkflowError;

use super::api_error::ApiError;

// =============================================================================
// From<ValidationError> for ApiError
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::ValidationError {
            message: error.message(),
            field: Some(error.field().to_string()),
        }
    }
}

// =============================================================================
// From<WorkflowError> for ApiError
// =============================================================================

impl From<WorkflowError> for ApiError {
    fn from(error: WorkflowError) -> Self {
        match error {
            WorkflowError::Validation(validation_error) => validation_error.into(),
            WorkflowError::NotFound {
                entity_type,
                identifier,
            } => ApiError::NotFound {
                entity_type,
                identifier,
            },
            WorkflowError::Conflict { reason } => ApiError::Conflict { reason },
            WorkflowError::Repository { operation, message } => ApiError::InternalError {
                message: format!("Repository {} failed: {}", operation, message),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rstest::rstest;

    #[rstest]
    fn validation_error_becomes_400_with_field() {
        let error: ApiError = ValidationError::empty_value("login").into();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        match error {
            ApiError::ValidationError { field, .. } => {
                assert_eq!(field.as_deref(), Some("login"));
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[rstest]
    fn workflow_not_found_becomes_404() {
        let error: ApiError = WorkflowError::not_found("Film", "5").into();

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.error_code(), "FILM_NOT_FOUND");
    }

    #[rstest]
    fn workflow_validation_becomes_400() {
        let workflow_error: WorkflowError = ValidationError::constraint_violation(
            "count",
            "must be positive",
        )
        .into();
        let error: ApiError = workflow_error.into();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    fn workflow_repository_becomes_500() {
        let error: ApiError = WorkflowError::repository("create", "timeout").into();

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.to_string().contains("create"));
    }

    #[rstest]
    fn workflow_conflict_becomes_409() {
        let error: ApiError = WorkflowError::conflict("duplicate").into();

        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }
}
