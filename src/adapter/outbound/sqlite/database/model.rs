//! Database model types for Diesel ORM.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Nullable, Text};

use super::schema::restaurants;
use crate::domain::{ManagerRecord, ManagerUpdate, RestaurantRating};
use crate::error::{Error, Result};

/// Database row for a restaurant.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RestaurantRow {
    pub restaurant_id: String,
    pub restaurant_name: Option<String>,
    pub manager: Option<String>,
    pub email: Option<String>,
    pub years_as_manager: Option<i32>,
}

impl From<RestaurantRow> for ManagerRecord {
    fn from(row: RestaurantRow) -> Self {
        Self {
            restaurant_id: row.restaurant_id,
            restaurant_name: row.restaurant_name,
            manager: row.manager,
            email: row.email,
            years: row.years_as_manager,
        }
    }
}

/// Partial update of the manager columns.
///
/// `None` fields are left out of the generated `SET` clause, so the stored
/// value is kept.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = restaurants)]
pub struct ManagerChangeset<'a> {
    pub manager: Option<&'a str>,
    pub email: Option<&'a str>,
    pub years_as_manager: Option<i32>,
}

impl<'a> From<&'a ManagerUpdate> for ManagerChangeset<'a> {
    fn from(update: &'a ManagerUpdate) -> Self {
        Self {
            manager: update.manager.as_deref(),
            email: update.email.as_ref().map(|email| email.as_str()),
            years_as_manager: update.years,
        }
    }
}

/// One non-null delivery time from `Orders`.
///
/// Numeric storage classes arrive in `value`. Anything else (typically text
/// from a CSV import) arrives untouched in `raw`.
#[derive(QueryableByName, Debug)]
pub struct DeliveryTimeRow {
    #[diesel(sql_type = Nullable<Double>)]
    pub value: Option<f64>,
    #[diesel(sql_type = Nullable<Text>)]
    pub raw: Option<String>,
}

impl DeliveryTimeRow {
    /// Delivery time in minutes, parsing text the way a float cast would.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDeliveryTime`] for text that is not a number.
    pub fn minutes(self) -> Result<f64> {
        if let Some(value) = self.value {
            return Ok(value);
        }
        let raw = self.raw.unwrap_or_default();
        raw.trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidDeliveryTime { value: raw })
    }
}

/// One group of the food rating aggregate.
#[derive(QueryableByName, Debug)]
pub struct FoodRatingRow {
    #[diesel(sql_type = Nullable<Text>)]
    pub restaurant_id: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub restaurant_name: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    pub mean_customer_rating_food: Option<f64>,
    #[diesel(sql_type = BigInt)]
    pub num_orders: i64,
}

impl From<FoodRatingRow> for RestaurantRating {
    fn from(row: FoodRatingRow) -> Self {
        Self {
            restaurant_id: row.restaurant_id,
            restaurant_name: row.restaurant_name,
            mean_customer_rating_food: row.mean_customer_rating_food,
            num_orders: row.num_orders,
        }
    }
}

/// Column name returned by `pragma_table_info`.
#[derive(QueryableByName, Debug)]
pub struct ColumnNameRow {
    #[diesel(sql_type = Text)]
    pub name: String,
}
