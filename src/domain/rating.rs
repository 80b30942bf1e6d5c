//! Per-restaurant food rating aggregates.

use serde::Serialize;

/// Mean customer food rating and order count for one restaurant.
///
/// `restaurant_id` is `None` for orders without a restaurant reference and
/// `restaurant_name` is `None` when the referenced restaurant does not exist.
/// `mean_customer_rating_food` is `None` when no order in the group was rated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRating {
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: Option<String>,
    #[serde(rename = "RestaurantName")]
    pub restaurant_name: Option<String>,
    #[serde(rename = "MeanCustomerRatingFood")]
    pub mean_customer_rating_food: Option<f64>,
    #[serde(rename = "NumOrders")]
    pub num_orders: i64,
}

/// True when `rows` never rises in mean rating; unrated rows must come last.
#[must_use]
pub fn is_best_first(rows: &[RestaurantRating]) -> bool {
    rows.windows(2).all(|pair| {
        match (pair[0].mean_customer_rating_food, pair[1].mean_customer_rating_food) {
            (Some(earlier), Some(later)) => earlier >= later,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    })
}
