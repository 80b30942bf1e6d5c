//! Delivery helpers - restaurant manager updates and order reports.
//!
//! This crate provides three independent operations over a delivery service
//! SQLite database holding `Restaurants` and `Orders` tables:
//!
//! - **Manager updates** - validate and partially update a restaurant's
//!   manager, email and years-as-manager fields
//! - **Delivery histogram** - bin all recorded delivery times into an
//!   equal-width frequency histogram
//! - **Food ratings** - mean customer food rating and order count per
//!   restaurant, best rated first
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files and logging setup
//! - [`domain`] - Validated value types: identifiers, emails, histograms, ratings
//! - [`port`] - Storage traits the operations are written against
//! - [`application`] - The operations themselves
//! - [`adapter`] - SQLite persistence and the `delivery` command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use delivery_helpers::adapter::outbound::sqlite::SqliteDeliveryStore;
//! use delivery_helpers::application::{manager, rating};
//! use delivery_helpers::domain::email::EmailPattern;
//!
//! fn main() -> delivery_helpers::error::Result<()> {
//!     let store = SqliteDeliveryStore::new("delivery_service.db");
//!     let pattern = EmailPattern::default();
//!
//!     let message = manager::update_manager(
//!         &store,
//!         &pattern,
//!         "R001",
//!         Some("Alice"),
//!         Some("alice@alpha.com"),
//!         Some(3),
//!     )?;
//!     println!("{message}");
//!
//!     for row in rating::mean_food_rating_by_restaurant(&store)? {
//!         println!("{row:?}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
