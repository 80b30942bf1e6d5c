//! Handlers for the `manager` command group.

use serde_json::json;

use super::command::{ManagerShowArgs, ManagerUpdateArgs};
use super::output;
use crate::application::manager;
use crate::config::Config;
use crate::error::Result;
use crate::port::outbound::store::RestaurantStore;

/// Execute `manager update`.
pub fn execute_update<S: RestaurantStore>(
    store: &S,
    config: &Config,
    args: &ManagerUpdateArgs,
) -> Result<()> {
    let pattern = config.email_pattern()?;
    let message = manager::update_manager(
        store,
        &pattern,
        &args.restaurant_id,
        args.manager.as_deref(),
        args.email.as_deref(),
        args.years,
    )?;

    if output::is_json() {
        return output::json_document(&json!({
            "command": "manager.update",
            "restaurant_id": args.restaurant_id,
            "message": message,
        }));
    }

    output::success(&message);
    Ok(())
}

/// Execute `manager show`.
pub fn execute_show<S: RestaurantStore>(store: &S, args: &ManagerShowArgs) -> Result<()> {
    let record = manager::load_manager(store, &args.restaurant_id)?;

    if output::is_json() {
        return output::json_document(&record);
    }

    let Some(record) = record else {
        output::note(&format!(
            "RestaurantID '{}' not found in Restaurants.",
            args.restaurant_id
        ));
        return Ok(());
    };

    output::section(&format!("Restaurant {}", record.restaurant_id));
    output::field("Name", display_or_dash(record.restaurant_name.as_deref()));
    output::field("Manager", display_or_dash(record.manager.as_deref()));
    output::field("Email", display_or_dash(record.email.as_deref()));
    output::field(
        "Years as manager",
        record
            .years
            .map_or_else(|| "-".to_string(), |years| years.to_string()),
    );
    Ok(())
}

fn display_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
