//! Restaurant manager updates.

use tracing::{debug, info};

use crate::domain::{EmailPattern, ManagerRecord, ManagerUpdate, RestaurantId};
use crate::error::Result;
use crate::port::outbound::store::RestaurantStore;

/// Update manager, email and years-as-manager of an existing restaurant.
///
/// Inputs are validated before the store is touched. Fields passed as `None`
/// keep their stored value. Returns a confirmation naming the restaurant.
///
/// # Errors
/// - [`DomainError`](crate::domain::DomainError) for a blank id or an email
///   that does not match `pattern`
/// - [`Error::NotFound`](crate::error::Error::NotFound) for an unknown id
/// - storage errors, unchanged
pub fn update_manager<S: RestaurantStore>(
    store: &S,
    pattern: &EmailPattern,
    restaurant_id: &str,
    manager: Option<&str>,
    email: Option<&str>,
    years: Option<i32>,
) -> Result<String> {
    let update = ManagerUpdate::try_new(restaurant_id, manager, email, years, pattern)?;
    debug!(
        restaurant_id = %update.restaurant_id,
        manager = update.manager.is_some(),
        email = update.email.is_some(),
        years = update.years.is_some(),
        "applying manager update"
    );

    store.apply_manager_update(&update)?;

    info!(restaurant_id = %update.restaurant_id, "manager info updated");
    Ok(format!(
        "Updated manager info for RestaurantID={}",
        update.restaurant_id
    ))
}

/// Load the stored manager fields of a restaurant.
///
/// # Errors
/// Returns a validation error for a blank id, or a storage error.
pub fn load_manager<S: RestaurantStore>(
    store: &S,
    restaurant_id: &str,
) -> Result<Option<ManagerRecord>> {
    let restaurant_id = RestaurantId::try_new(restaurant_id)?;
    store.load_manager(&restaurant_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake::FakeStore;
    use crate::domain::DomainError;
    use crate::error::Error;

    #[test]
    fn returns_confirmation() {
        let store = FakeStore::with_restaurant("R001");
        let message =
            update_manager(&store, &EmailPattern::default(), "R001", Some("Alice"), None, None)
                .unwrap();
        assert_eq!(message, "Updated manager info for RestaurantID=R001");
    }

    #[test]
    fn only_manager_leaves_other_fields() {
        let store = FakeStore::with_restaurant("R001");
        update_manager(&store, &EmailPattern::default(), "R001", Some("Alice"), None, None).unwrap();

        let record = load_manager(&store, "R001").unwrap().unwrap();
        assert_eq!(record.manager.as_deref(), Some("Alice"));
        assert_eq!(record.email.as_deref(), Some("zed@pasta.com"));
        assert_eq!(record.years, Some(7));
    }

    #[test]
    fn validation_happens_before_store_access() {
        let store = FakeStore::with_restaurant("R001");

        let err = update_manager(&store, &EmailPattern::default(), "", None, None, None).unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::MissingRestaurantId)));

        let err = update_manager(
            &store,
            &EmailPattern::default(),
            "R001",
            None,
            Some("al1ce@alpha.com"),
            None,
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn unknown_restaurant_is_not_found() {
        let store = FakeStore::with_restaurant("R001");
        let err =
            update_manager(&store, &EmailPattern::default(), "R999", Some("Alice"), None, None)
                .unwrap_err();
        assert!(matches!(err, Error::NotFound { ref restaurant_id } if restaurant_id == "R999"));
        assert_eq!(err.to_string(), "RestaurantID 'R999' not found in Restaurants");
    }

    #[test]
    fn load_manager_rejects_blank_id() {
        let store = FakeStore::default();
        assert!(load_manager(&store, "").unwrap_err().is_validation());
    }
}
