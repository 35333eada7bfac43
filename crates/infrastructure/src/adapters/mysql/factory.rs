//! MySQL connection pool factory.

use sqlx::mysql::MySqlPoolOptions;

use super::{MySqlPool, MySqlPoolConfig};
use crate::errors::InfraError;

// =============================================================================
// MySqlPoolFactory
// =============================================================================

/// Factory for creating MySQL connection pools from a
/// [`MySqlPoolConfig`].
///
/// # Examples
///
/// ```rust,ignore
/// use filmotek_infrastructure::adapters::mysql::{MySqlPoolConfig, MySqlPoolFactory};
///
/// let config = MySqlPoolConfig::with_url("mysql://localhost/filmotek");
/// let pool = MySqlPoolFactory::create_pool(&config).await?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MySqlPoolFactory;

impl MySqlPoolFactory {
    /// Creates a MySQL connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] for an empty URL and
    /// [`InfraError::Connection`] if the database cannot be reached.
    pub async fn create_pool(config: &MySqlPoolConfig) -> Result<MySqlPool, InfraError> {
        if config.url.is_empty() {
            return Err(InfraError::configuration("database URL must not be empty"));
        }

        let mut options = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout);

        if let Some(idle_timeout) = config.idle_timeout {
            options = options.idle_timeout(idle_timeout);
        }

        let pool = options
            .connect(&config.url)
            .await
            .map_err(|error| InfraError::connection(error.to_string()))?;

        Ok(MySqlPool::new(pool))
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
    #[tokio::test]
    async fn empty_url_is_a_configuration_error() {
        let config = MySqlPoolConfig::default();

        let error = MySqlPoolFactory::create_pool(&config).await.unwrap_err();

        assert!(error.is_configuration());
    }
}
