//! In-memory store used by the operation unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::domain::{ManagerRecord, ManagerUpdate, RestaurantId, RestaurantRating};
use crate::error::{Error, Result};
use crate::port::outbound::report::OrderReportReader;
use crate::port::outbound::store::RestaurantStore;

#[derive(Default)]
pub(crate) struct FakeStore {
    pub restaurants: RefCell<BTreeMap<String, ManagerRecord>>,
    pub delivery_times: Vec<f64>,
    pub ratings: Vec<RestaurantRating>,
    pub calls: Cell<usize>,
}

impl FakeStore {
    pub fn with_restaurant(id: &str) -> Self {
        let store = Self::default();
        store.restaurants.borrow_mut().insert(
            id.to_string(),
            ManagerRecord {
                restaurant_id: id.to_string(),
                restaurant_name: Some("Pasta Place".to_string()),
                manager: Some("Zed".to_string()),
                email: Some("zed@pasta.com".to_string()),
                years: Some(7),
            },
        );
        store
    }

    fn touch(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl RestaurantStore for FakeStore {
    fn apply_manager_update(&self, update: &ManagerUpdate) -> Result<()> {
        self.touch();
        let mut restaurants = self.restaurants.borrow_mut();
        let record = restaurants
            .get_mut(update.restaurant_id.as_str())
            .ok_or_else(|| Error::NotFound {
                restaurant_id: update.restaurant_id.to_string(),
            })?;
        if let Some(manager) = &update.manager {
            record.manager = Some(manager.clone());
        }
        if let Some(email) = &update.email {
            record.email = Some(email.to_string());
        }
        if let Some(years) = update.years {
            record.years = Some(years);
        }
        Ok(())
    }

    fn load_manager(&self, restaurant_id: &RestaurantId) -> Result<Option<ManagerRecord>> {
        self.touch();
        Ok(self.restaurants.borrow().get(restaurant_id.as_str()).cloned())
    }
}

impl OrderReportReader for FakeStore {
    fn load_delivery_times(&self) -> Result<Vec<f64>> {
        self.touch();
        Ok(self.delivery_times.clone())
    }

    fn load_food_ratings(&self) -> Result<Vec<RestaurantRating>> {
        self.touch();
        Ok(self.ratings.clone())
    }
}
