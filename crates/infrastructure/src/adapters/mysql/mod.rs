//! MySQL storage adapters.
//!
//! The pool wrapper, its configuration and factory, and one adapter per
//! port. SQL stays close to the schema in `migrations/`; genre and MPA
//! ids resolve against the in-code vocabulary tables, so there are no
//! vocabulary tables in the database.

mod config;
mod factory;
mod films;
mod friendships;
mod likes;
mod pool;
mod users;

pub use config::MySqlPoolConfig;
pub use factory::MySqlPoolFactory;
pub use films::MySqlFilmRepository;
pub use friendships::MySqlFriendshipStore;
pub use likes::MySqlLikeStore;
pub use pool::MySqlPool;
pub use users::MySqlUserRepository;

use filmotek_workflow::errors::WorkflowError;

/// Maps a sqlx failure into the port error taxonomy, logging it once at
/// the adapter boundary.
pub(crate) fn storage_error(operation: &'static str, error: &sqlx::Error) -> WorkflowError {
    tracing::error!("MySQL operation '{}' failed: {}", operation, error);
    WorkflowError::repository(operation, error.to_string())
}

/// Maps a corrupt or unexpected row into the port error taxonomy.
pub(crate) fn corrupt_row(operation: &'static str, detail: impl std::fmt::Display) -> WorkflowError {
    tracing::error!("MySQL operation '{}' read a corrupt row: {}", operation, detail);
    WorkflowError::repository(operation, format!("corrupt row: {}", detail))
}
