//! Request ID middleware.
//!
//! Every request gets an id, either the one the client sent in
//! `x-request-id` or a freshly generated UUID. The id is stored in the
//! request extensions and echoed back on the response.

use std::task::{Context, Poll};

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Request, Response};
use futures::future::BoxFuture;
use tower::{Layer, Service};
use uuid::Uuid;

/// The header carrying the request id.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

// =============================================================================
// RequestId
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// RequestIdLayer
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RequestIdLayer;

impl RequestIdLayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<InnerService> Layer<InnerService> for RequestIdLayer {
    type Service = RequestIdService<InnerService>;

    fn layer(&self, inner: InnerService) -> Self::Service {
        RequestIdService { inner }
    }
}

// =============================================================================
// RequestIdService
// =============================================================================

#[derive(Debug, Clone)]
pub struct RequestIdService<InnerService> {
    inner: InnerService,
}

impl<InnerService, RequestBody, ResponseBody> Service<Request<RequestBody>>
    for RequestIdService<InnerService>
where
    InnerService:
        Service<Request<RequestBody>, Response = Response<ResponseBody>> + Clone + Send + 'static,
    InnerService::Future: Send,
    RequestBody: Send + 'static,
    ResponseBody: Send + 'static,
{
    type Response = Response<ResponseBody>;
    type Error = InnerService::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(context)
    }

    fn call(&mut self, mut request: Request<RequestBody>) -> Self::Future {
        let request_id = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(RequestId::new)
            .unwrap_or_else(RequestId::generate);

        request.extensions_mut().insert(request_id.clone());

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(request).await?;

            if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
                response
                    .headers_mut()
                    .insert(REQUEST_ID_HEADER.clone(), header_value);
            }

            Ok(response)
        })
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
    fn new_wraps_given_id() {
        let id = RequestId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[rstest]
    fn generate_creates_unique_ids() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[rstest]
    fn generate_creates_valid_uuid() {
        let id = RequestId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[rstest]
    fn display_matches_inner() {
        let id = RequestId::new("req-1");
        assert_eq!(format!("{}", id), "req-1");
    }
}
