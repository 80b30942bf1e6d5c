//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and are always raised
//! before any database access happens.
//!
//! # Examples
//!
//! ```
//! use delivery_helpers::domain::error::DomainError;
//! use delivery_helpers::domain::id::RestaurantId;
//!
//! let result = RestaurantId::try_new("   ");
//! assert!(matches!(result, Err(DomainError::MissingRestaurantId)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every manager update must name the restaurant it targets.
    #[error("restaurant_id is required")]
    MissingRestaurantId,

    /// Email did not match the configured pattern.
    #[error("email must match {expected}")]
    InvalidEmail {
        /// Human-readable description of the accepted shape.
        expected: String,
    },

    /// A histogram needs at least one bin.
    #[error("bin count must be at least 1, got {bins}")]
    InvalidBinCount {
        /// The rejected bin count.
        bins: usize,
    },
}
