//! Restaurant identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Restaurant identifier - newtype for type safety.
///
/// The inner String is private so every instance has passed the
/// non-empty check in [`RestaurantId::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Create a `RestaurantId`, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingRestaurantId`] when `id` is blank.
    pub fn try_new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::MissingRestaurantId);
        }
        Ok(Self(id))
    }

    /// Get the restaurant ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for RestaurantId {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}
