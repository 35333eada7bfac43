//! MySQL pool configuration.

use std::time::Duration;

// =============================================================================
// MySqlPoolConfig
// =============================================================================

/// Configuration for the MySQL connection pool.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use filmotek_infrastructure::adapters::mysql::MySqlPoolConfig;
///
/// let config = MySqlPoolConfig::with_url("mysql://localhost/filmotek")
///     .with_max_connections(20)
///     .with_connect_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.max_connections, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlPoolConfig {
    /// The MySQL connection URL.
    ///
    /// Format: `mysql://[user[:password]@]host[:port]/database[?options]`
    pub url: String,

    /// Maximum number of connections in the pool. Defaults to 10.
    pub max_connections: u32,

    /// Minimum number of connections in the pool. Defaults to 1.
    pub min_connections: u32,

    /// Maximum time to wait for a connection. Defaults to 30 seconds.
    pub connect_timeout: Duration,

    /// Maximum idle time before a connection is closed; `None` keeps
    /// idle connections forever. Defaults to 10 minutes.
    pub idle_timeout: Option<Duration>,
}

impl Default for MySqlPoolConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
        }
    }
}

// =============================================================================
// Builder Methods
// =============================================================================

impl MySqlPoolConfig {
    /// Creates a configuration with the given URL and default settings.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the maximum number of connections.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the minimum number of connections.
    #[must_use]
    pub fn with_min_connections(mut self, min_connections: u32) -> Self {
        self.min_connections = min_connections;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Sets the idle timeout.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Option<Duration>) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
