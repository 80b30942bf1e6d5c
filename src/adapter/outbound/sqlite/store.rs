//! SQLite restaurant store implementation.
//!
//! Provides manager updates and lookups against the `Restaurants` table
//! using Diesel ORM.

use std::path::{Path, PathBuf};

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use super::contract::{self, TableContract};
use super::database::connection;
use super::database::model::{ManagerChangeset, RestaurantRow};
use super::database::schema::restaurants;
use crate::domain::{ManagerRecord, ManagerUpdate, RestaurantId};
use crate::error::{Error, Result};
use crate::port::outbound::store::RestaurantStore;

/// SQLite-backed delivery service store.
///
/// Implements [`RestaurantStore`] and
/// [`OrderReportReader`](crate::port::outbound::report::OrderReportReader).
/// Holds only the database path; each call opens and drops its own
/// connection.
#[derive(Debug, Clone)]
pub struct SqliteDeliveryStore {
    /// Path to the SQLite database file.
    path: PathBuf,
}

impl SqliteDeliveryStore {
    /// Create a store for the database file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verify that the database exposes every table and column the
    /// operations reference.
    ///
    /// # Errors
    /// Returns a schema error naming the first missing table or column, or a
    /// connection error.
    pub fn check_schema(&self) -> Result<()> {
        self.connect(contract::FULL).map(drop)
    }

    /// Open a connection and check the given contracts on it.
    pub(super) fn connect(&self, contracts: &[TableContract]) -> Result<SqliteConnection> {
        let mut conn = connection::establish(&self.path)?;
        contract::verify(&mut conn, contracts)?;
        Ok(conn)
    }
}

impl RestaurantStore for SqliteDeliveryStore {
    fn apply_manager_update(&self, update: &ManagerUpdate) -> Result<()> {
        let mut conn = self.connect(&[contract::RESTAURANT_MANAGER])?;
        let restaurant_id = update.restaurant_id.as_str();
        let not_found = || Error::NotFound {
            restaurant_id: restaurant_id.to_string(),
        };

        // Existence check and write share one write-locked transaction.
        conn.immediate_transaction(|conn| {
            let found: bool = diesel::select(exists(restaurants::table.find(restaurant_id)))
                .get_result(conn)?;
            if !found {
                return Err(not_found());
            }

            if !update.has_changes() {
                debug!(restaurant_id, "manager update has no fields to write");
                return Ok(());
            }

            let updated = diesel::update(restaurants::table.find(restaurant_id))
                .set(ManagerChangeset::from(update))
                .execute(conn)?;
            if updated == 0 {
                return Err(not_found());
            }
            Ok(())
        })
    }

    fn load_manager(&self, restaurant_id: &RestaurantId) -> Result<Option<ManagerRecord>> {
        let mut conn = self.connect(&[contract::RESTAURANT_MANAGER])?;

        let row: Option<RestaurantRow> = restaurants::table
            .find(restaurant_id.as_str())
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(ManagerRecord::from))
    }
}
