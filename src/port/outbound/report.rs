//! Read-side reporting/query ports.

use crate::domain::RestaurantRating;
use crate::error::Result;

/// Read-side order report contract.
pub trait OrderReportReader {
    /// Load every non-null delivery time, in minutes.
    fn load_delivery_times(&self) -> Result<Vec<f64>>;

    /// Load mean food rating and order count per restaurant, best rated first.
    fn load_food_ratings(&self) -> Result<Vec<RestaurantRating>>;
}
