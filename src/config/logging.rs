//! `[logging]` table and tracing subscriber setup for the `delivery` binary.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Line format written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive such as `warn` or `delivery_helpers=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Parse `level` as a filter directive.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for directives `EnvFilter`
    /// rejects.
    pub fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Install the global subscriber, writing to stderr so stdout only
    /// carries command output. `RUST_LOG` wins over the configured level.
    ///
    /// A second call is a no-op.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| self.filter())
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        let _ = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::default(),
        }
    }
}
