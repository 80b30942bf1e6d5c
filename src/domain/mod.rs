//! Storage-agnostic domain types.

pub mod email;
pub mod error;
pub mod histogram;
pub mod id;
pub mod manager;
pub mod rating;

pub use email::{EmailAddress, EmailPattern};
pub use error::DomainError;
pub use histogram::{Histogram, HistogramBin};
pub use id::RestaurantId;
pub use manager::{ManagerRecord, ManagerUpdate};
pub use rating::RestaurantRating;
