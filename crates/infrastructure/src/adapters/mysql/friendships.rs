//! MySQL implementation of the friendship store.

use filmotek_domain::friendship::FriendshipStatus;
use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FriendshipStore, WorkflowResult};

use super::{MySqlPool, storage_error};

// =============================================================================
// MySqlFriendshipStore
// =============================================================================

/// MySQL-backed friendship store.
///
/// Edges are rows in `user_friends` keyed by `(user_id, friend_id)`
/// with a textual status column. `INSERT IGNORE` gives `request` its
/// idempotence: an existing edge of any status wins over a new
/// request. `confirm` writes both directions inside one transaction so
/// no reader observes a state where only one direction is confirmed.
#[derive(Debug, Clone)]
pub struct MySqlFriendshipStore {
    pool: MySqlPool,
}

impl MySqlFriendshipStore {
    /// Creates a new MySQL friendship store on the given pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// FriendshipStore Implementation
// =============================================================================

impl FriendshipStore for MySqlFriendshipStore {
    async fn request(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        sqlx::query("INSERT IGNORE INTO user_friends (user_id, friend_id, status) VALUES (?, ?, ?)")
            .bind(from.value())
            .bind(to.value())
            .bind(FriendshipStatus::Requested.as_str())
            .execute(self.pool.as_inner())
            .await
            .map_err(|error| storage_error("request", &error))?;

        tracing::debug!("User {} requested friendship with user {}", from, to);
        Ok(())
    }

    async fn confirm(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        let mut transaction = self
            .pool
            .as_inner()
            .begin()
            .await
            .map_err(|error| storage_error("confirm", &error))?;

        for (source, target) in [(from, to), (to, from)] {
            sqlx::query(
                r#"
                INSERT INTO user_friends (user_id, friend_id, status)
                VALUES (?, ?, ?)
                ON DUPLICATE KEY UPDATE status = VALUES(status)
                "#,
            )
            .bind(source.value())
            .bind(target.value())
            .bind(FriendshipStatus::Confirmed.as_str())
            .execute(&mut *transaction)
            .await
            .map_err(|error| storage_error("confirm", &error))?;
        }

        transaction
            .commit()
            .await
            .map_err(|error| storage_error("confirm", &error))?;

        tracing::debug!("User {} confirmed friendship with user {}", from, to);
        Ok(())
    }

    async fn remove(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        let result = sqlx::query("DELETE FROM user_friends WHERE user_id = ? AND friend_id = ?")
            .bind(from.value())
            .bind(to.value())
            .execute(self.pool.as_inner())
            .await
            .map_err(|error| storage_error("remove", &error))?;

        tracing::debug!(
            "Removed friendship edge {} -> {} (rows_affected={})",
            from,
            to,
            result.rows_affected()
        );
        Ok(())
    }

    async fn list_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT friend_id FROM user_friends WHERE user_id = ? ORDER BY friend_id",
        )
        .bind(from.value())
        .fetch_all(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("list_from", &error))?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }

    async fn list_confirmed_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT friend_id
            FROM user_friends
            WHERE user_id = ? AND status = ?
            ORDER BY friend_id
            "#,
        )
        .bind(from.value())
        .bind(FriendshipStatus::Confirmed.as_str())
        .fetch_all(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("list_confirmed_from", &error))?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }
}
