//! Port definitions the operations are written against.
//!
//! Outbound ports describe what the application needs from persistence;
//! the SQLite adapter implements them.

pub mod outbound;
