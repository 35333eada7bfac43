//! API middleware components.
//!
//! - [`request_id`]: request ID injection and response echo
//! - [`response_time`]: response time measurement

pub mod request_id;
pub mod response_time;

pub use request_id::{RequestId, RequestIdLayer};
pub use response_time::ResponseTimeLayer;
