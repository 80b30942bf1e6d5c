//! Mean food rating per restaurant.

use tracing::debug;

use crate::domain::RestaurantRating;
use crate::error::Result;
use crate::port::outbound::report::OrderReportReader;

/// Mean customer food rating and order count per restaurant, best rated first.
///
/// Unrated orders count towards `NumOrders` but not towards the mean. Orders
/// referencing an unknown restaurant are kept with no name.
///
/// # Errors
/// Returns storage errors unchanged.
pub fn mean_food_rating_by_restaurant<S: OrderReportReader>(
    store: &S,
) -> Result<Vec<RestaurantRating>> {
    let rows = store.load_food_ratings()?;
    debug!(restaurants = rows.len(), "loaded food ratings");
    Ok(rows)
}
