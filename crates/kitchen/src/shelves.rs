use serde::Serialize;

use fridgekeeper_inventory::{
    CategoryFilter, FRIDGE_SHELVES, InventoryStore, Item, Location, Shelf, group_fridge_items,
};

/// Human label for where an item sits.
pub fn shelf_label(location: Location, shelf: Option<Shelf>) -> &'static str {
    match (location, shelf) {
        (Location::Freezer, _) => "Freezer Shelf",
        (Location::Fridge, Some(Shelf::Top)) => "Top Shelf",
        (Location::Fridge, Some(Shelf::Middle)) => "Middle Shelf",
        (Location::Fridge, Some(Shelf::Bottom)) => "Bottom Shelf",
        (Location::Fridge, None) => "Unknown Shelf",
    }
}

pub fn item_shelf_label(item: &Item) -> &'static str {
    shelf_label(item.location(), item.shelf())
}

/// Shelf-by-shelf picture of the appliance for one category selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FridgeLayout<'a> {
    /// Top, middle, bottom.
    pub fridge: [Vec<&'a Item>; FRIDGE_SHELVES],
    /// The freezer has a single shelf.
    pub freezer: Vec<&'a Item>,
}

impl<'a> FridgeLayout<'a> {
    pub fn build(store: &'a InventoryStore, filter: CategoryFilter) -> Self {
        let selected = store.list_by_category(filter);
        let freezer = selected
            .iter()
            .copied()
            .filter(|item| item.location() == Location::Freezer)
            .collect();
        Self {
            fridge: group_fridge_items(selected),
            freezer,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.freezer.is_empty() && self.fridge.iter().all(Vec::is_empty)
    }
}
