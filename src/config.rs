//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly to the store, router and CLI.
//!
//! ```bash
//! export VILINKS_DB="$HOME/.vilinks/vilinks.db"
//! export VILINKS_BIND="127.0.0.1"
//! export VILINKS_PORT="8765"
//! export VILINKS_BASE_HOST="vi"
//! ```
//!
//! ## Optional Variables
//!
//! - `VILINKS_DB` - Database file (default: `~/.vilinks/vilinks.db`)
//! - `VILINKS_BIND` - Bind host (default: `127.0.0.1`)
//! - `VILINKS_PORT` - Bind port (default: `8765`)
//! - `VILINKS_BASE_HOST` - Host shown in front of aliases (default: `vi`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - Seconds to wait on a locked database (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::persistence::{StoreOptions, default_database_path};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub bind_host: String,
    pub port: u16,
    /// Host shown in front of each alias on the listing page, e.g. `vi/docs`.
    pub base_host: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds a connection waits for a write lock (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            bind_host: "127.0.0.1".to_string(),
            port: 8765,
            base_host: "vi".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_busy_timeout: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let database_path = env::var_os("VILINKS_DB")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);
        let bind_host = env::var("VILINKS_BIND").unwrap_or(defaults.bind_host);
        let port = parse_var("VILINKS_PORT")?.unwrap_or(defaults.port);
        let base_host = env::var("VILINKS_BASE_HOST").unwrap_or(defaults.base_host);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let db_max_connections =
            parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(defaults.db_max_connections);
        let db_busy_timeout = parse_var("DB_BUSY_TIMEOUT")?.unwrap_or(defaults.db_busy_timeout);

        Ok(Self {
            database_path,
            bind_host,
            port,
            base_host,
            log_level,
            log_format,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - the database path or bind host is empty
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("VILINKS_DB must not be empty");
        }

        if self.bind_host.trim().is_empty() {
            anyhow::bail!("VILINKS_BIND must not be empty");
        }

        if self.base_host.contains('/') {
            anyhow::bail!(
                "VILINKS_BASE_HOST must be a bare host without '/', got '{}'",
                self.base_host
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Address the HTTP server binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Prefix shown before each alias, e.g. `vi/`.
    pub fn base_prefix(&self) -> String {
        format!("{}/", self.base_host)
    }

    /// Settings for [`crate::infrastructure::persistence::Store::open`].
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            path: self.database_path.clone(),
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Database: {}", self.database_path.display());
        tracing::info!("  Base prefix: {}", self.base_prefix());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Pool size: {}", self.db_max_connections);
    }
}

/// Reads an optional variable and parses it, failing on malformed values.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
