//! Outbound ports (driven side).

pub mod report;
pub mod store;
