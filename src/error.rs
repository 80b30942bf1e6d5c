use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// The database does not expose the tables and columns the operations read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("expected table {table} is missing from the database")]
    MissingTable { table: &'static str },

    #[error("expected column {table}.{column} is missing from the database")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("RestaurantID '{restaurant_id}' not found in Restaurants")]
    NotFound { restaurant_id: String },

    #[error("DeliveryTimeMins value '{value}' is not a number")]
    InvalidDeliveryTime { value: String },

    #[error(transparent)]
    Database(#[from] diesel::result::Error),

    #[error(transparent)]
    Connection(#[from] diesel::ConnectionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for input validation failures raised before any database access.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}
