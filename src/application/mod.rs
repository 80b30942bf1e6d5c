//! Application operations.
//!
//! Each operation validates its inputs, then talks to storage through the
//! outbound ports. Operations are independent of each other and keep no
//! state between calls.

pub mod histogram;
pub mod manager;
pub mod rating;

#[cfg(test)]
pub(crate) mod fake;
