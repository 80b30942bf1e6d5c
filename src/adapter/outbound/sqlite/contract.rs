//! Schema contract for the externally owned delivery database.
//!
//! The tables are created and migrated elsewhere. Before running a query each
//! operation checks that the columns it references exist, so a mismatched
//! database fails with a [`SchemaError`] naming the missing piece instead of
//! a raw SQLite error.

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::SqliteConnection;

use super::database::model::ColumnNameRow;
use crate::error::{Result, SchemaError};

/// Columns one operation needs from one table.
#[derive(Debug, Clone, Copy)]
pub struct TableContract {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// Restaurant columns read and written by manager updates.
pub const RESTAURANT_MANAGER: TableContract = TableContract {
    table: "Restaurants",
    columns: &[
        "RestaurantID",
        "RestaurantName",
        "Manager",
        "Email",
        "Years_as_manager",
    ],
};

/// Restaurant columns joined into the rating report.
pub const RESTAURANT_NAMES: TableContract = TableContract {
    table: "Restaurants",
    columns: &["RestaurantID", "RestaurantName"],
};

/// Order columns read by the delivery histogram.
pub const ORDER_DELIVERY: TableContract = TableContract {
    table: "Orders",
    columns: &["DeliveryTimeMins"],
};

/// Order columns read by the rating report.
pub const ORDER_RATINGS: TableContract = TableContract {
    table: "Orders",
    columns: &["RestaurantID", "CustomerRatingFood"],
};

/// Every column any operation references.
pub const FULL: &[TableContract] = &[
    RESTAURANT_MANAGER,
    TableContract {
        table: "Orders",
        columns: &["RestaurantID", "DeliveryTimeMins", "CustomerRatingFood"],
    },
];

/// Check that every contract holds on `conn`.
///
/// # Errors
/// Returns [`SchemaError::MissingTable`] or [`SchemaError::MissingColumn`]
/// for the first violation, or a database error if the catalog query fails.
pub fn verify(conn: &mut SqliteConnection, contracts: &[TableContract]) -> Result<()> {
    for contract in contracts {
        let present = table_columns(conn, contract.table)?;
        if present.is_empty() {
            return Err(SchemaError::MissingTable {
                table: contract.table,
            }
            .into());
        }

        // SQLite resolves identifiers case-insensitively.
        if let Some(column) = contract
            .columns
            .iter()
            .copied()
            .find(|column| !present.iter().any(|name| name.eq_ignore_ascii_case(column)))
        {
            return Err(SchemaError::MissingColumn {
                table: contract.table,
                column,
            }
            .into());
        }
    }
    Ok(())
}

fn table_columns(conn: &mut SqliteConnection, table: &str) -> Result<Vec<String>> {
    let rows: Vec<ColumnNameRow> = diesel::sql_query("SELECT name FROM pragma_table_info(?)")
        .bind::<Text, _>(table)
        .load(conn)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}
