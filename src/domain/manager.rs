//! Restaurant manager contact fields.

use serde::Serialize;

use super::email::{EmailAddress, EmailPattern};
use super::error::DomainError;
use super::id::RestaurantId;

/// A validated partial update of a restaurant's manager fields.
///
/// `None` means "leave the stored value as it is", never "clear it".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerUpdate {
    pub restaurant_id: RestaurantId,
    pub manager: Option<String>,
    pub email: Option<EmailAddress>,
    pub years: Option<i32>,
}

impl ManagerUpdate {
    /// Validate raw inputs into an update.
    ///
    /// The identifier is checked first, then the email. An empty email string
    /// skips the pattern and clears the stored email to `""`.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingRestaurantId`] or
    /// [`DomainError::InvalidEmail`].
    pub fn try_new(
        restaurant_id: &str,
        manager: Option<&str>,
        email: Option<&str>,
        years: Option<i32>,
        pattern: &EmailPattern,
    ) -> Result<Self, DomainError> {
        let restaurant_id = RestaurantId::try_new(restaurant_id)?;
        let email = email
            .map(|candidate| {
                if candidate.is_empty() {
                    Ok(EmailAddress::blank())
                } else {
                    EmailAddress::parse(candidate, pattern)
                }
            })
            .transpose()?;

        Ok(Self {
            restaurant_id,
            manager: manager.map(str::to_string),
            email,
            years,
        })
    }

    /// True when at least one field would be written.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.manager.is_some() || self.email.is_some() || self.years.is_some()
    }
}

/// Stored manager fields of one restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerRecord {
    #[serde(rename = "RestaurantID")]
    pub restaurant_id: String,
    #[serde(rename = "RestaurantName")]
    pub restaurant_name: Option<String>,
    #[serde(rename = "Manager")]
    pub manager: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Years_as_manager")]
    pub years: Option<i32>,
}
