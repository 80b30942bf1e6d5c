//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct passed explicitly to every operation in
//! place of process-wide constants. Configuration is loaded from a TOML file;
//! every field has a default matching the historical behavior, and the
//! database path can be overridden with `DELIVERY_DATABASE`.
//!
//! # Example
//!
//! ```no_run
//! use delivery_helpers::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("delivery.toml")?;
//!     config.logging.init();
//!     let pattern = config.email_pattern()?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::application::histogram::DEFAULT_BINS;
use crate::domain::email::{EmailPattern, DEFAULT_EMAIL_PATTERN};
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`Config::database`].
pub const DATABASE_ENV: &str = "DELIVERY_DATABASE";

/// Histogram rendering defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Number of equal-width bins.
    pub bins: usize,
    /// Width in characters of the longest bar.
    pub width: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            width: 50,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the delivery service SQLite database.
    ///
    /// Defaults to "delivery_service.db" in the current directory.
    pub database: PathBuf,

    /// Regular expression manager emails must match.
    pub email_pattern: String,

    /// Histogram defaults.
    pub histogram: HistogramConfig,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("delivery_service.db"),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            histogram: HistogramConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path` if the file exists, otherwise use
    /// defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `DELIVERY_DATABASE` when it is set to a non-empty value.
    pub fn apply_env_overrides(&mut self) {
        if let Some(database) = std::env::var_os(DATABASE_ENV).filter(|v| !v.is_empty()) {
            self.database = PathBuf::from(database);
        }
    }

    /// Compile the configured email pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the pattern does not compile.
    pub fn email_pattern(&self) -> Result<EmailPattern> {
        EmailPattern::new(&self.email_pattern).map_err(|e| {
            ConfigError::InvalidValue {
                field: "email_pattern",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.histogram.bins == 0 {
            return Err(ConfigError::InvalidValue {
                field: "histogram.bins",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.histogram.width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "histogram.width",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.email_pattern()?;
        self.logging.filter()?;
        Ok(())
    }
}
