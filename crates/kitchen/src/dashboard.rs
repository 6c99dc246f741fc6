use chrono::{DateTime, Utc};
use serde::Serialize;

use fridgekeeper_inventory::{Category, InventoryStore, Location};

use crate::notifications::badge_count;

/// Quantity per category. Every category is present, zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub dairy: u64,
    pub produce: u64,
    pub meat: u64,
    pub beverage: u64,
    pub other: u64,
}

impl CategoryCounts {
    pub fn from_store(store: &InventoryStore) -> Self {
        let mut counts = Self::default();
        for category in Category::ALL {
            *counts.slot_mut(category) = store.quantity_of(category);
        }
        counts
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Dairy => self.dairy,
            Category::Produce => self.produce,
            Category::Meat => self.meat,
            Category::Beverage => self.beverage,
            Category::Other => self.other,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut u64 {
        match category {
            Category::Dairy => &mut self.dairy,
            Category::Produce => &mut self.produce,
            Category::Meat => &mut self.meat,
            Category::Beverage => &mut self.beverage,
            Category::Other => &mut self.other,
        }
    }
}

/// Header cards of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_quantity: u64,
    pub by_category: CategoryCounts,
    pub fridge_quantity: u64,
    pub freezer_quantity: u64,
    /// Bell badge.
    pub alert_count: usize,
}

impl DashboardSummary {
    pub fn build(store: &InventoryStore, now: DateTime<Utc>, alert_window_days: i64) -> Self {
        Self {
            total_quantity: store.total_quantity(),
            by_category: CategoryCounts::from_store(store),
            fridge_quantity: store.quantity_in(Location::Fridge),
            freezer_quantity: store.quantity_in(Location::Freezer),
            alert_count: badge_count(store, now, alert_window_days),
        }
    }
}
