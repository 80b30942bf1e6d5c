//! SQLite database modules.
//!
//! Provides connection setup, schema definitions, and Diesel model types
//! for the delivery service database.

pub mod connection;
pub mod model;
pub mod schema;
