//! In-memory storage adapters.
//!
//! Mutex-guarded ordered maps with an explicit id-allocation counter.
//! These satisfy the same port contracts as the MySQL adapters and back
//! the integration tests and single-process deployments.

mod films;
mod friendships;
mod likes;
mod users;

pub use films::MemoryFilmRepository;
pub use friendships::MemoryFriendshipStore;
pub use likes::MemoryLikeStore;
pub use users::MemoryUserRepository;

use filmotek_workflow::errors::WorkflowError;

/// Error for a poisoned storage mutex: a writer panicked mid-update, so
/// the map can no longer be trusted.
pub(crate) fn poisoned(operation: &'static str) -> WorkflowError {
    WorkflowError::repository(operation, "storage mutex poisoned")
}
