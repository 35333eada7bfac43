//! MySQL connection pool wrapper.

use std::sync::Arc;

// =============================================================================
// MySqlPool
// =============================================================================

/// A MySQL connection pool with Arc-based sharing.
///
/// Wraps `sqlx::MySqlPool` in an `Arc` so every adapter holding a clone
/// shares the same underlying pool.
///
/// # Examples
///
/// ```rust,ignore
/// use filmotek_infrastructure::adapters::mysql::{MySqlPoolConfig, MySqlPoolFactory};
///
/// let config = MySqlPoolConfig::with_url("mysql://localhost/filmotek");
/// let pool = MySqlPoolFactory::create_pool(&config).await?;
///
/// // Clone is cheap - shares the same underlying pool
/// let pool_clone = pool.clone();
/// ```
#[derive(Clone)]
pub struct MySqlPool {
    inner: Arc<sqlx::MySqlPool>,
}

impl MySqlPool {
    /// Creates a new `MySqlPool` from an existing `sqlx::MySqlPool`.
    #[must_use]
    pub fn new(pool: sqlx::MySqlPool) -> Self {
        Self {
            inner: Arc::new(pool),
        }
    }

    /// Returns whether the pool has been explicitly closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Closes the pool, waiting for connections to be returned.
    pub async fn close(&self) {
        self.inner.close().await;
    }

    /// Returns a reference to the underlying `sqlx::MySqlPool`, for
    /// passing to sqlx query executors.
    #[must_use]
    pub fn as_inner(&self) -> &sqlx::MySqlPool {
        &self.inner
    }
}

impl From<sqlx::MySqlPool> for MySqlPool {
    fn from(pool: sqlx::MySqlPool) -> Self {
        Self::new(pool)
    }
}

impl AsRef<sqlx::MySqlPool> for MySqlPool {
    fn as_ref(&self) -> &sqlx::MySqlPool {
        &self.inner
    }
}

impl std::fmt::Debug for MySqlPool {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MySqlPool")
            .field("is_closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
