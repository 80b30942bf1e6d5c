//! Write-side persistence port for restaurants.

use crate::domain::{ManagerRecord, ManagerUpdate, RestaurantId};
use crate::error::Result;

/// Storage operations for restaurant manager fields.
pub trait RestaurantStore {
    /// Apply a partial manager update to an existing restaurant.
    ///
    /// Only the fields set on `update` are written. Fails with
    /// [`Error::NotFound`](crate::error::Error::NotFound) when the restaurant
    /// does not exist, without modifying any row.
    fn apply_manager_update(&self, update: &ManagerUpdate) -> Result<()>;

    /// Load the stored manager fields of a restaurant.
    fn load_manager(&self, restaurant_id: &RestaurantId) -> Result<Option<ManagerRecord>>;
}
