//! One household session: the store plus everything that reads it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use fridgekeeper_core::DomainResult;
use fridgekeeper_inventory::{CategoryFilter, InventoryStore, Item, ItemDraft, ItemId};
use fridgekeeper_kitchen::{
    Companion, DashboardSummary, ExpiryDigest, FridgeLayout, IngredientCheck, ItemQuery, ItemRow,
    Mood, RecipeBook, Vitals, list_rows,
};

use crate::config::AppConfig;
use crate::sample::sample_inventory;

/// Owns the inventory for the lifetime of the UI session.
///
/// Views receive `&InventoryStore` and never mutate it; every mutation goes
/// through the methods here.
#[derive(Debug, Clone)]
pub struct Session {
    config: AppConfig,
    store: InventoryStore,
    companion: Companion,
    recipes: RecipeBook,
}

impl Session {
    /// Start a session, seeding the starter inventory when configured to.
    pub fn start(config: AppConfig, now: DateTime<Utc>) -> DomainResult<Self> {
        let store = if config.seed_sample_data {
            InventoryStore::seeded(sample_inventory(now)?)
        } else {
            InventoryStore::new()
        };
        tracing::info!(
            items = store.len(),
            alert_window_days = config.alert_window_days,
            "session started"
        );

        Ok(Self {
            companion: Companion::new(config.pet_name.as_str()),
            recipes: RecipeBook::builtin(),
            config,
            store,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn companion(&self) -> &Companion {
        &self.companion
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Submit the add-item form.
    pub fn add_item(&mut self, draft: &ItemDraft, now: DateTime<Utc>) -> DomainResult<Item> {
        let candidate = draft.validate(now).inspect_err(|err| {
            tracing::info!("rejected new item {:?}: {}", draft.name, err);
        })?;
        let item = self.store.add(candidate);
        tracing::info!("added {} (id {}) to the {}", item.name(), item.id_typed(), item.location());
        Ok(item)
    }

    pub fn remove_item(&mut self, id: ItemId) {
        self.store.remove(id);
    }

    pub fn consume_item(&mut self, id: ItemId) {
        self.store.consume(id);
    }

    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardSummary {
        DashboardSummary::build(&self.store, now, self.config.alert_window_days)
    }

    pub fn notifications(&self, now: DateTime<Utc>) -> ExpiryDigest<'_> {
        ExpiryDigest::build(&self.store, now, self.config.alert_window_days)
    }

    pub fn item_rows(&self, query: &ItemQuery, now: DateTime<Utc>) -> Vec<ItemRow<'_>> {
        list_rows(&self.store, query, now)
    }

    pub fn fridge_layout(&self, filter: CategoryFilter) -> FridgeLayout<'_> {
        FridgeLayout::build(&self.store, filter)
    }

    pub fn recipe_suggestions(&self) -> Vec<IngredientCheck<'_>> {
        self.recipes.suggestions(&self.store)
    }

    pub fn pet_companion(&mut self) -> Vitals {
        self.companion.pet();
        self.companion.vitals()
    }

    pub fn feed_companion(&mut self) -> Vitals {
        self.companion.feed();
        self.companion.vitals()
    }

    /// Everything the home screen shows, computed for `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot<'_> {
        Snapshot {
            taken_at: now,
            dashboard: self.dashboard(now),
            notifications: self.notifications(now),
            makeable_recipes: self
                .recipes
                .makeable(&self.store)
                .into_iter()
                .map(|recipe| recipe.name.as_str())
                .collect(),
            companion_mood: self.companion.mood(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub taken_at: DateTime<Utc>,
    pub dashboard: DashboardSummary,
    pub notifications: ExpiryDigest<'a>,
    pub makeable_recipes: Vec<&'a str>,
    pub companion_mood: Mood,
}
