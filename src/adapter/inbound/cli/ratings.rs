//! Handler for the `ratings` command.

use tabled::{Table, Tabled};

use super::output;
use crate::application::rating;
use crate::domain::RestaurantRating;
use crate::error::Result;
use crate::port::outbound::report::OrderReportReader;

#[derive(Tabled)]
struct RatingRow {
    #[tabled(rename = "RestaurantID")]
    restaurant_id: String,
    #[tabled(rename = "RestaurantName")]
    restaurant_name: String,
    #[tabled(rename = "MeanCustomerRatingFood")]
    mean: String,
    #[tabled(rename = "NumOrders")]
    num_orders: i64,
}

impl From<&RestaurantRating> for RatingRow {
    fn from(rating: &RestaurantRating) -> Self {
        Self {
            restaurant_id: rating.restaurant_id.clone().unwrap_or_else(|| "-".to_string()),
            restaurant_name: rating.restaurant_name.clone().unwrap_or_else(|| "-".to_string()),
            mean: rating
                .mean_customer_rating_food
                .map_or_else(|| "-".to_string(), |mean| format!("{mean:.2}")),
            num_orders: rating.num_orders,
        }
    }
}

/// Render ratings as a table.
#[must_use]
pub fn render_table(ratings: &[RestaurantRating]) -> String {
    Table::new(ratings.iter().map(RatingRow::from)).to_string()
}

/// Execute `ratings`.
pub fn execute<S: OrderReportReader>(store: &S) -> Result<()> {
    let ratings = rating::mean_food_rating_by_restaurant(store)?;

    if output::is_json() {
        return output::json_document(&ratings);
    }

    output::section("Mean food rating by restaurant");
    if ratings.is_empty() {
        output::note("No orders found.");
        return Ok(());
    }
    println!();
    output::block(&render_table(&ratings));
    println!();
    Ok(())
}
