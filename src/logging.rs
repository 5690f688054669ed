//! Logging System
//!
//! Structured diagnostics through `tracing`. Events go to stderr so that stdout
//! carries only the per-file status lines and the tally.

use crate::error::InjectError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "SCRIPT_INJECT_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system
///
/// `SCRIPT_INJECT_LOG` wins over `config.level` when set and parseable.
pub fn init_logging(config: &LoggingConfig) -> Result<(), InjectError> {
    let filter = build_env_filter(config)?;
    let base_subscriber = Registry::default().with(filter);

    let result = match config.format.as_str() {
        "json" => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        "text" => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        other => {
            return Err(InjectError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            )))
        }
    };
    result.map_err(|e| InjectError::Logging(e.to_string()))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, InjectError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| InjectError::Logging(format!("Invalid log level '{}': {}", config.level, e)))
}
