//! Response time middleware.
//!
//! Measures each request, adds an `x-response-time` header (in
//! milliseconds) and logs the timing through tracing.

use std::task::{Context, Poll};
use std::time::Instant;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Request, Response};
use futures::future::BoxFuture;
use tower::{Layer, Service};

/// The header carrying the response time in milliseconds.
pub static RESPONSE_TIME_HEADER: HeaderName = HeaderName::from_static("x-response-time");

// =============================================================================
// ResponseTimeLayer
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ResponseTimeLayer;

impl ResponseTimeLayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<InnerService> Layer<InnerService> for ResponseTimeLayer {
    type Service = ResponseTimeService<InnerService>;

    fn layer(&self, inner: InnerService) -> Self::Service {
        ResponseTimeService { inner }
    }
}

// =============================================================================
// ResponseTimeService
// =============================================================================

#[derive(Debug, Clone)]
pub struct ResponseTimeService<InnerService> {
    inner: InnerService,
}

impl<InnerService, RequestBody, ResponseBody> Service<Request<RequestBody>>
    for ResponseTimeService<InnerService>
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

    fn call(&mut self, request: Request<RequestBody>) -> Self::Future {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let started_at = Instant::now();

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(request).await?;

            let elapsed = started_at.elapsed();
            let milliseconds = elapsed.as_millis();

            tracing::debug!("{} {} took {}ms", method, path, milliseconds);

            if let Ok(header_value) = HeaderValue::from_str(&format!("{}ms", milliseconds)) {
                response
                    .headers_mut()
                    .insert(RESPONSE_TIME_HEADER.clone(), header_value);
            }

            Ok(response)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
