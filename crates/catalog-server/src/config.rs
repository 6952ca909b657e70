//! Server configuration loaded from the process environment.

use thiserror::Error;

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "products.db";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors produced while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CATALOG_PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub db_path: String,
    /// TCP port to listen on (all interfaces).
    pub port: u16,
}

impl ServerConfig {
    /// Reads `CATALOG_DB_PATH` and `CATALOG_PORT` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("CATALOG_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidPort {
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(ServerConfig { db_path, port })
    }

    /// The socket address to bind, e.g. `0.0.0.0:8080`.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
