//! Handler for the `check` command.

use serde_json::json;

use super::output;
use crate::adapter::outbound::sqlite::contract::FULL;
use crate::adapter::outbound::sqlite::SqliteDeliveryStore;
use crate::error::Result;

/// Execute `check`: verify the schema contract against the database.
pub fn execute(store: &SqliteDeliveryStore) -> Result<()> {
    store.check_schema()?;

    if output::is_json() {
        let tables: Vec<_> = FULL
            .iter()
            .map(|contract| json!({ "table": contract.table, "columns": contract.columns }))
            .collect();
        return output::json_document(&json!({
            "command": "check",
            "database": store.path().display().to_string(),
            "ok": true,
            "tables": tables,
        }));
    }

    output::section("Schema check");
    output::field("Database", store.path().display());
    for contract in FULL {
        output::success(&format!("{} ({})", contract.table, contract.columns.join(", ")));
    }
    Ok(())
}
