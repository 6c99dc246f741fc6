use chrono::{DateTime, Utc};
use serde::Serialize;

use fridgekeeper_inventory::{CategoryFilter, Freshness, InventoryStore, Item};

use crate::shelves::item_shelf_label;

/// Search box + category chips of the list view.
///
/// The search text is matched as typed, spaces included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl ItemQuery {
    pub fn matches(&self, item: &Item) -> bool {
        let needle = self.search.to_lowercase();
        self.category.matches(item.category())
            && (needle.is_empty() || item.name().to_lowercase().contains(&needle))
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow<'a> {
    pub item: &'a Item,
    pub freshness: Freshness,
    /// Badge text for the freshness status.
    pub status_label: &'static str,
    pub shelf_label: &'static str,
}

pub fn list_rows<'a>(
    store: &'a InventoryStore,
    query: &ItemQuery,
    now: DateTime<Utc>,
) -> Vec<ItemRow<'a>> {
    store
        .iter()
        .filter(|item| query.matches(item))
        .map(|item| {
            let freshness = item.freshness(now);
            ItemRow {
                item,
                freshness,
                status_label: freshness.status.label(),
                shelf_label: item_shelf_label(item),
            }
        })
        .collect()
}
