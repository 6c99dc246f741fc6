//! Inventory domain module.
//!
//! Items, the expiry classifier and the in-memory inventory store, implemented
//! purely as deterministic domain logic (no IO, no clock reads: `now` is
//! always passed in).

pub mod expiry;
pub mod icon;
pub mod item;
pub mod store;

pub use expiry::{ExpiryStatus, Freshness, classify, days_until};
pub use icon::FoodIcon;
pub use item::{
    Category, CategoryFilter, FRIDGE_SHELVES, Item, ItemDraft, Location, NewItem, Shelf,
    parse_expiry_date,
};
pub use store::{
    AddItem, ConsumeItem, InventoryCommand, InventoryEvent, InventoryStore, ItemAdded,
    ItemConsumed, ItemRemoved, RemoveItem, group_fridge_items,
};

pub use fridgekeeper_core::ItemId;
