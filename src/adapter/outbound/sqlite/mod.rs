//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed implementation of the restaurant store and the
//! order report reader using Diesel ORM, plus the schema contract checked
//! before every operation.

pub mod contract;
pub mod database;
pub mod report;
pub mod store;

pub use store::SqliteDeliveryStore;
