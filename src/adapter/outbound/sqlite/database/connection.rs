//! Database connection setup using Diesel ORM.
//!
//! Every operation opens its own connection and drops it on return, so the
//! file handle is released on success and error paths alike.

use std::path::Path;

use diesel::prelude::*;
use diesel::{ConnectionError, SqliteConnection};
use tracing::debug;

use crate::error::Result;

/// Open a connection to an existing SQLite database file.
///
/// The file is never created: a missing path is reported as a connection
/// error instead of silently producing an empty database.
///
/// # Errors
/// Returns an error if the file is missing or SQLite refuses to open it.
pub fn establish(path: &Path) -> Result<SqliteConnection> {
    if !path.is_file() {
        return Err(ConnectionError::BadConnection(format!(
            "database file {} does not exist",
            path.display()
        ))
        .into());
    }

    debug!(database = %path.display(), "opening sqlite connection");
    let conn = SqliteConnection::establish(&path.to_string_lossy())?;
    Ok(conn)
}
