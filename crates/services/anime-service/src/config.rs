//! Anime service configuration.

use std::env;

use common::DatabaseConfig;

/// Default HTTP port for the anime service.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address for the anime service.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Anime service configuration.
#[derive(Debug, Clone)]
pub struct AnimeServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl AnimeServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("ANIME_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            host: env::var("ANIME_SERVICE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("ANIME_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
