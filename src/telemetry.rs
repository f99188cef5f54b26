//! # Telemetry
//!
//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Error type for subscriber installation.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Builds the event filter. `RUST_LOG` wins over the configured directives.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] if the configured directives are invalid.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(TelemetryError::from)
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] if the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_parses() {
        assert!(env_filter(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn second_install_fails() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(TelemetryError::Init(_))));
    }
}
