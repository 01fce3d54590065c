//! Server configuration.
//!
//! Values are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `.env` in the working directory (never overrides real variables)
//! 3. Process environment
//!
//! ## Keys
//! - `PORT` - HTTP port (default: 8080)
//! - `DB_CONN` - PostgreSQL connection string (unset: in-memory store)
//! - `DB_REQUIRED` - exit instead of degrading when the database is down (default: false)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use config::{Config, Environment};
use serde::Deserialize;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default database pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Local env file consulted at startup.
pub const ENV_FILE: &str = ".env";

/// Number of connection-string characters shown in logs.
const DB_CONN_LOG_CHARS: usize = 30;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP port; the server binds `0.0.0.0:{port}`.
    pub port: u16,

    /// PostgreSQL connection string.
    #[serde(default)]
    pub db_conn: Option<String>,

    /// Treat a failed database connection as fatal.
    pub db_required: bool,

    /// Maximum pooled connections.
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env_file`] first for `.env` values to be visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(None)
    }

    /// Builds the configuration from an explicit variable map, or from the
    /// process environment when `vars` is `None`.
    pub fn from_source(vars: Option<config::Map<String, String>>) -> Result<Self, ConfigError> {
        let config: AppConfig = Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("db_required", false)?
            .set_default("db_max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .add_source(Environment::default().source(vars))
            .build()?
            .try_deserialize()?;

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Connection string, if one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.db_conn
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Connection string cut short for logging.
    pub fn database_url_for_log(&self) -> String {
        match self.database_url() {
            Some(url) => url.chars().take(DB_CONN_LOG_CHARS).collect(),
            None => "<none>".to_string(),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Reads `KEY=value` pairs from `path` into the process environment.
/// Variables that are already set keep their values.
///
/// Returns whether the file existed. A missing file is not an error.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    Ok(true)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read env file: {0}")]
    EnvFile(String),
}
