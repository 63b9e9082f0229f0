use std::env;
use std::time::Duration;

use crate::db::StorageConfig;

/// Process-wide configuration, assembled from the environment with a
/// fallback default per field.
pub struct Config {
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            storage: StorageConfig {
                database_path: env::var("CATALOG_DB_PATH").unwrap_or_else(|_| "catalog.db".to_string()),
                max_connections: env::var("CATALOG_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(8),
                connect_timeout: Duration::from_secs(
                    env::var("CATALOG_DB_CONNECT_TIMEOUT_SECS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(8),
                ),
                acquire_timeout: Duration::from_secs(
                    env::var("CATALOG_DB_ACQUIRE_TIMEOUT_SECS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(10),
                ),
                sqlx_logging: env::var("CATALOG_DB_SQLX_LOGGING")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
            },
        }
    }
}
