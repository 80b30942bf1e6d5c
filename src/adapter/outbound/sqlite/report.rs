//! SQLite read-side report adapter.
//!
//! Implements the order report reader for the histogram and rating
//! operations.

use diesel::prelude::*;

use super::contract;
use super::database::model::{DeliveryTimeRow, FoodRatingRow};
use super::store::SqliteDeliveryStore;
use crate::domain::RestaurantRating;
use crate::error::Result;
use crate::port::outbound::report::OrderReportReader;

// Text is handed over raw: CAST(... AS REAL) would turn 'late' into 0.0.
const DELIVERY_TIMES_SQL: &str = "\
    SELECT CASE WHEN typeof(DeliveryTimeMins) IN ('integer', 'real') \
                THEN CAST(DeliveryTimeMins AS REAL) END AS value, \
           CASE WHEN typeof(DeliveryTimeMins) = 'text' \
                THEN DeliveryTimeMins END AS raw \
    FROM Orders \
    WHERE DeliveryTimeMins IS NOT NULL";

// AVG skips NULL ratings while COUNT(*) counts every order in the group.
// NULL means sort last under DESC; the id keeps ties in a stable order.
const FOOD_RATINGS_SQL: &str = "\
    SELECT o.RestaurantID AS restaurant_id, \
           r.RestaurantName AS restaurant_name, \
           AVG(o.CustomerRatingFood) AS mean_customer_rating_food, \
           COUNT(*) AS num_orders \
    FROM Orders o \
    LEFT JOIN Restaurants r ON r.RestaurantID = o.RestaurantID \
    GROUP BY o.RestaurantID, r.RestaurantName \
    ORDER BY mean_customer_rating_food DESC, restaurant_id ASC";

impl OrderReportReader for SqliteDeliveryStore {
    fn load_delivery_times(&self) -> Result<Vec<f64>> {
        let mut conn = self.connect(&[contract::ORDER_DELIVERY])?;

        let rows: Vec<DeliveryTimeRow> = diesel::sql_query(DELIVERY_TIMES_SQL).load(&mut conn)?;

        rows.into_iter().map(DeliveryTimeRow::minutes).collect()
    }

    fn load_food_ratings(&self) -> Result<Vec<RestaurantRating>> {
        let mut conn = self.connect(&[contract::ORDER_RATINGS, contract::RESTAURANT_NAMES])?;

        let rows: Vec<FoodRatingRow> = diesel::sql_query(FOOD_RATINGS_SQL).load(&mut conn)?;

        Ok(rows.into_iter().map(RestaurantRating::from).collect())
    }
}
