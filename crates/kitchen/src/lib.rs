//! `fridgekeeper-kitchen` — read-side views over the inventory.
//!
//! Everything here is a pure derivation from `&InventoryStore` and an explicit
//! `now`; views never mutate the store. A renderer builds them fresh on every
//! draw instead of caching counts that could drift from the store.

pub mod companion;
pub mod dashboard;
pub mod listing;
pub mod notifications;
pub mod recipes;
pub mod shelves;

pub use companion::{Companion, Mood, Vitals};
pub use dashboard::{CategoryCounts, DashboardSummary};
pub use listing::{ItemQuery, ItemRow, list_rows};
pub use notifications::{DEFAULT_ALERT_WINDOW_DAYS, ExpiryDigest, Notice, badge_count};
pub use recipes::{Difficulty, IngredientCheck, Recipe, RecipeBook};
pub use shelves::{FridgeLayout, shelf_label};
