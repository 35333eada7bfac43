//! Health check handler.

use axum::Json;

use crate::dto::response::{HealthResponse, HealthStatusResponse};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Health Check Handler
// =============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatusResponse::Healthy,
        version: VERSION.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn health_check_reports_healthy() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, HealthStatusResponse::Healthy);
        assert_eq!(response.version, VERSION);
    }
}
