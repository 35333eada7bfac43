//! API error handling and response conversion.
//!
//! - [`ApiError`]: the error type all handlers return
//! - [`conversion`]: conversions from domain/workflow errors

pub mod api_error;
pub mod conversion;

pub use api_error::ApiError;
