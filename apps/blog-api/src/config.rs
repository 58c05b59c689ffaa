//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: Self::database_from_env("DATABASE_URL"),
        }
    }

    /// Configuration for test runs: an ephemeral local port and the
    /// dedicated, disposable database named by `TEST_DATABASE_URL`.
    ///
    /// Without `TEST_DATABASE_URL` the service runs on the in-memory store.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: Self::database_from_env("TEST_DATABASE_URL"),
        }
    }

    fn database_from_env(url_var: &str) -> Option<DatabaseConfig> {
        let url = env::var(url_var).ok().filter(|url| !url.is_empty())?;

        let mut config = DatabaseConfig::new(url);
        if let Some(max) = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.max_connections = max;
        }
        if let Some(min) = env::var("DB_MIN_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.min_connections = min;
        }
        Some(config)
    }
}
