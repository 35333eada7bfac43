//! Workflow layer for Filmotek
//!
//! This crate defines the application's use cases and the abstract port
//! definitions (traits) they run against, without any concrete IO
//! implementation. Adapters in the infrastructure crate satisfy the
//! ports; the API crate drives the workflows.

pub mod errors;
pub mod ports;
pub mod workflows;

pub use errors::WorkflowError;
pub use ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository, WorkflowResult};
