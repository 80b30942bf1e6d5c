//! Configuration loading and logging setup.

pub mod logging;
pub mod settings;

pub use logging::{LogFormat, LoggingConfig};
pub use settings::{Config, HistogramConfig};
