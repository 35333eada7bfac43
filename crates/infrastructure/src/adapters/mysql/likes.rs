//! MySQL implementation of the like store.

use sqlx::Row;

use filmotek_domain::film::{Film, FilmId};
use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{LikeStore, WorkflowResult};

use super::films::{film_from_row, load_genres};
use super::{MySqlPool, storage_error};

// =============================================================================
// MySqlLikeStore
// =============================================================================

/// MySQL-backed like store.
///
/// Likes are rows in the `film_likes` table keyed by `(film_id,
/// user_id)`; the primary key makes insertion idempotent and `DELETE`
/// makes removal a natural no-op for absent edges. The popularity
/// ordering is pushed down into SQL.
#[derive(Debug, Clone)]
pub struct MySqlLikeStore {
    pool: MySqlPool,
}

impl MySqlLikeStore {
    /// Creates a new MySQL like store on the given pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// LikeStore Implementation
// =============================================================================

impl LikeStore for MySqlLikeStore {
    async fn add(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
        sqlx::query("INSERT IGNORE INTO film_likes (film_id, user_id) VALUES (?, ?)")
            .bind(film_id.value())
            .bind(user_id.value())
            .execute(self.pool.as_inner())
            .await
            .map_err(|error| storage_error("add", &error))?;

        tracing::debug!("User {} liked film {}", user_id, film_id);
        Ok(())
    }

    async fn remove(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
        let result = sqlx::query("DELETE FROM film_likes WHERE film_id = ? AND user_id = ?")
            .bind(film_id.value())
            .bind(user_id.value())
            .execute(self.pool.as_inner())
            .await
            .map_err(|error| storage_error("remove", &error))?;

        tracing::debug!(
            "User {} unliked film {} (rows_affected={})",
            user_id,
            film_id,
            result.rows_affected()
        );
        Ok(())
    }

    async fn count_for(&self, film_id: FilmId) -> WorkflowResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM film_likes WHERE film_id = ?")
                .bind(film_id.value())
                .fetch_one(self.pool.as_inner())
                .await
                .map_err(|error| storage_error("count_for", &error))?;

        Ok(count as u64)
    }

    async fn top(&self, limit: u32) -> WorkflowResult<Vec<Film>> {
        // Count descending, id ascending: the same ordering the
        // in-memory store produces with rank_by_likes.
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.title, f.description, f.release_date, f.duration_minutes, f.mpa_rating_id
            FROM films f
            LEFT JOIN film_likes fl ON f.id = fl.film_id
            GROUP BY f.id, f.title, f.description, f.release_date, f.duration_minutes, f.mpa_rating_id
            ORDER BY COUNT(fl.user_id) DESC, f.id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("top", &error))?;

        let mut films = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row
                .try_get("id")
                .map_err(|error| storage_error("top", &error))?;
            let genres = load_genres(&self.pool, "top", FilmId::new(id)).await?;
            films.push(film_from_row("top", row, genres)?);
        }
        Ok(films)
    }
}
