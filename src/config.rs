//! # Configuration
//!
//! Application settings loaded with the `config` crate.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`config/default.toml` unless a path is given; optional)
//! 3. Environment variables prefixed `AO_TABLES__`, nested with `__`
//!    (e.g. `AO_TABLES__SERVER__PORT=9000`, `AO_TABLES__DATABASE__URL=...`)
//!
//! `server.cors_origins` may be given in the environment as a
//! comma-separated list.
//!
//! # Examples
//!
//! ```
//! use ao_tables::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.server.socket_addr(), "0.0.0.0:8080");
//! assert!(config.database.url.is_none());
//! ```

use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default configuration file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "AO_TABLES";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A value was read but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL. Without one, records are kept in memory.
    #[serde(default)]
    pub url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, an optional file and the environment.
    ///
    /// With `path` set, that file must exist. Otherwise
    /// [`DEFAULT_CONFIG_FILE`] is read if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source is unreadable or a value
    /// has the wrong type, and [`ConfigError::Invalid`] if a value is out
    /// of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = Self::builder()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn builder() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.acquire_timeout_secs",
                i64::try_from(defaults.database.acquire_timeout_secs).unwrap_or(i64::MAX),
            )?
            .set_default("logging.filter", defaults.logging.filter)?
            .set_default("logging.json", defaults.logging.json)?)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero-sized pool or an empty
    /// database URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.database.url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "database.url must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ao-tables-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_config(
            r#"
            [server]
            port = 9090
            cors_origins = ["http://localhost:4200"]

            [database]
            url = "postgres://localhost/ao"

            [logging]
            json = true
            "#,
        );

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.cors_origins, vec!["http://localhost:4200"]);
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/ao"));
        assert_eq!(config.database.max_connections, 10);
        assert!(config.logging.json);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("ao-tables-does-not-exist.toml");
        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn zero_pool_is_invalid() {
        let path = write_config("[database]\nmax_connections = 0\n");
        let result = AppConfig::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn blank_database_url_is_invalid() {
        let mut config = AppConfig::default();
        config.database.url = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn socket_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        };
        assert_eq!(server.socket_addr(), "127.0.0.1:3000");
    }
}
