use chrono::{DateTime, Utc};
use serde::Serialize;

use fridgekeeper_core::{Aggregate, AggregateRoot, DomainError, ItemId};
use fridgekeeper_events::Event;

use crate::expiry;
use crate::item::{Category, CategoryFilter, FRIDGE_SHELVES, Item, Location, NewItem, Shelf};

/// Aggregate root: the household's inventory.
///
/// Items are kept in insertion order; every query preserves that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<Item>,
    next_id: ItemId,
    version: u64,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::from_raw(1),
            version: 0,
        }
    }

    /// Build a store by adding each candidate in order.
    pub fn seeded(candidates: impl IntoIterator<Item = NewItem>) -> Self {
        let mut store = Self::new();
        for candidate in candidates {
            store.add(candidate);
        }
        store
    }

    /// Add a validated candidate under a fresh id and return the stored item.
    pub fn add(&mut self, candidate: NewItem) -> Item {
        let added = self.decide_add(candidate);
        let item = added.item.clone();
        self.commit(vec![InventoryEvent::ItemAdded(added)]);
        item
    }

    /// Delete the item. Absent ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let events = self.decide_remove(id);
        self.commit(events);
    }

    /// Take one unit of the item; the last unit removes it. Absent ids are ignored.
    pub fn consume(&mut self, id: ItemId) {
        let events = self.decide_consume(id);
        self.commit(events);
    }

    /// Generic command path: decide, then apply what was decided.
    pub fn execute(
        &mut self,
        command: &InventoryCommand,
    ) -> Result<Vec<InventoryEvent>, DomainError> {
        let events = self.handle(command)?;
        self.commit(events.clone());
        Ok(events)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn list_by_location(&self, location: Location) -> Vec<&Item> {
        self.iter().filter(|item| item.location() == location).collect()
    }

    /// Items in the category, or every item for [`CategoryFilter::All`].
    pub fn list_by_category(&self, filter: impl Into<CategoryFilter>) -> Vec<&Item> {
        let filter = filter.into();
        self.iter()
            .filter(|item| filter.matches(item.category()))
            .collect()
    }

    /// Sum of quantities over all items.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity_where(|_| true)
    }

    /// Sum of quantities over items matching `predicate`.
    pub fn total_quantity_where(&self, predicate: impl Fn(&Item) -> bool) -> u64 {
        self.iter()
            .filter(|item| predicate(item))
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    pub fn quantity_in(&self, location: Location) -> u64 {
        self.total_quantity_where(|item| item.location() == location)
    }

    pub fn quantity_of(&self, category: Category) -> u64 {
        self.total_quantity_where(|item| item.category() == category)
    }

    /// Items at most `days` whole days from expiry, already expired ones included.
    pub fn list_expiring_within(&self, days: i64, now: DateTime<Utc>) -> Vec<&Item> {
        self.iter()
            .filter(|item| expiry::days_until(item.expires_at(), now) <= days)
            .collect()
    }

    /// Fridge items bucketed by shelf, top to bottom.
    pub fn group_fridge_by_shelf(&self) -> [Vec<&Item>; FRIDGE_SHELVES] {
        group_fridge_items(self.iter())
    }

    fn decide_add(&self, candidate: NewItem) -> ItemAdded {
        ItemAdded {
            item: candidate.into_item(self.next_id),
        }
    }

    fn decide_remove(&self, id: ItemId) -> Vec<InventoryEvent> {
        if !self.contains(id) {
            tracing::debug!(item_id = %id, "remove ignored: item not in inventory");
            return Vec::new();
        }
        vec![InventoryEvent::ItemRemoved(ItemRemoved { item_id: id })]
    }

    fn decide_consume(&self, id: ItemId) -> Vec<InventoryEvent> {
        if !self.contains(id) {
            tracing::debug!(item_id = %id, "consume ignored: item not in inventory");
            return Vec::new();
        }
        vec![InventoryEvent::ItemConsumed(ItemConsumed { item_id: id })]
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    fn commit(&mut self, events: Vec<InventoryEvent>) {
        for event in &events {
            self.apply(event);
            tracing::debug!(
                event_type = event.event_type(),
                item_id = %event.item_id(),
                version = self.version,
                "inventory event applied"
            );
        }
    }
}

/// Partition fridge items into shelf buckets.
///
/// Freezer items are skipped. A fridge item without a shelf lands on the top
/// shelf.
pub fn group_fridge_items<'a>(
    items: impl IntoIterator<Item = &'a Item>,
) -> [Vec<&'a Item>; FRIDGE_SHELVES] {
    let mut shelves: [Vec<&'a Item>; FRIDGE_SHELVES] = Default::default();
    for item in items {
        if item.location() != Location::Fridge {
            continue;
        }
        let shelf = item.shelf().unwrap_or(Shelf::Top);
        shelves[shelf.index()].push(item);
    }
    shelves
}

impl AggregateRoot for InventoryStore {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub candidate: NewItem,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveItem {
    pub item_id: ItemId,
}

/// Command: ConsumeItem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeItem {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    ConsumeItem(ConsumeItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAdded {
    pub item: Item,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRemoved {
    pub item_id: ItemId,
}

/// Event: ItemConsumed. One unit taken; the last unit takes the item with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemConsumed {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    ItemConsumed(ItemConsumed),
}

impl InventoryEvent {
    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemAdded(e) => e.item.id_typed(),
            InventoryEvent::ItemRemoved(e) => e.item_id,
            InventoryEvent::ItemConsumed(e) => e.item_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
            InventoryEvent::ItemConsumed(_) => "inventory.item.consumed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for InventoryStore {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    /// Events that do not fit the current state (an id already taken, an item
    /// already gone) are skipped and leave the version untouched.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                let id = e.item.id_typed();
                if self.contains(id) {
                    tracing::warn!(item_id = %id, "add skipped: id already in inventory");
                    return;
                }
                if e.item.is_backdated() {
                    tracing::warn!(
                        item_id = %id,
                        name = e.item.name(),
                        "item expires before the date it was added"
                    );
                }
                if id >= self.next_id {
                    self.next_id = id.next();
                }
                self.items.push(e.item.clone());
            }
            InventoryEvent::ItemRemoved(e) => {
                let Some(pos) = self.position(e.item_id) else {
                    return;
                };
                self.items.remove(pos);
            }
            InventoryEvent::ItemConsumed(e) => {
                let Some(pos) = self.position(e.item_id) else {
                    return;
                };
                let quantity = self.items[pos].quantity();
                if quantity > 1 {
                    self.items[pos].set_quantity(quantity - 1);
                } else {
                    self.items.remove(pos);
                }
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => {
                Ok(vec![InventoryEvent::ItemAdded(self.decide_add(cmd.candidate.clone()))])
            }
            InventoryCommand::RemoveItem(cmd) => Ok(self.decide_remove(cmd.item_id)),
            InventoryCommand::ConsumeItem(cmd) => Ok(self.decide_consume(cmd.item_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    use crate::expiry::ExpiryStatus;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn candidate(name: &str, category: Category, quantity: u32) -> NewItem {
        NewItem::new(
            name,
            category,
            Location::Fridge,
            quantity,
            test_time(),
            test_time() + Duration::days(7),
        )
        .unwrap()
    }

    fn on_shelf(name: &str, shelf: Option<Shelf>) -> NewItem {
        let c = candidate(name, Category::Produce, 1);
        match shelf {
            Some(s) => c.with_shelf(s),
            None => c,
        }
    }

    #[test]
    fn add_assigns_fresh_sequential_ids() {
        let mut store = InventoryStore::new();
        let a = store.add(candidate("Milk", Category::Beverage, 1));
        let b = store.add(candidate("Cheese", Category::Dairy, 2));

        assert_ne!(a.id_typed(), b.id_typed());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b.id_typed()), Some(&b));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = InventoryStore::new();
        let first = store.add(candidate("Milk", Category::Beverage, 1));
        store.remove(first.id_typed());
        let second = store.add(candidate("Milk", Category::Beverage, 1));

        assert!(second.id_typed() > first.id_typed());
    }

    #[test]
    fn re_adding_an_item_discards_its_id() {
        let mut store = InventoryStore::new();
        let original = store.add(candidate("Yogurt", Category::Dairy, 3));
        let copy = store.add(NewItem::from(original.clone()));

        assert_ne!(copy.id_typed(), original.id_typed());
        assert_eq!(copy.name(), original.name());
        assert_eq!(copy.quantity(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn consume_decrements_and_keeps_identity() {
        let mut store = InventoryStore::new();
        let yogurt = store.add(candidate("Yogurt", Category::Dairy, 3));

        store.consume(yogurt.id_typed());

        let after = store.get(yogurt.id_typed()).unwrap();
        assert_eq!(after.quantity(), 2);
        assert_eq!(after.id_typed(), yogurt.id_typed());
    }

    #[test]
    fn consuming_the_last_unit_removes_the_item() {
        let mut store = InventoryStore::new();
        let milk = store.add(candidate("Milk", Category::Beverage, 1));

        store.consume(milk.id_typed());

        assert!(store.get(milk.id_typed()).is_none());
        assert!(store.list_by_category(CategoryFilter::All).is_empty());
        assert!(store.list_by_location(Location::Fridge).is_empty());
        assert_eq!(store.total_quantity(), 0);
    }

    #[test]
    fn absent_ids_are_no_ops() {
        let mut store = InventoryStore::new();
        store.add(candidate("Milk", Category::Beverage, 1));
        let before = store.clone();

        store.remove(ItemId::from_raw(99));
        store.consume(ItemId::from_raw(99));

        assert_eq!(store, before);
        let events = store
            .execute(&InventoryCommand::ConsumeItem(ConsumeItem {
                item_id: ItemId::from_raw(99),
            }))
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut once = InventoryStore::new();
        let milk = once.add(candidate("Milk", Category::Beverage, 1));
        once.add(candidate("Cheese", Category::Dairy, 1));
        let mut twice = once.clone();

        once.remove(milk.id_typed());
        twice.remove(milk.id_typed());
        twice.remove(milk.id_typed());

        assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn handle_does_not_mutate_and_apply_replays() {
        let store = InventoryStore::new();
        let cmd = InventoryCommand::AddItem(AddItem {
            candidate: candidate("Butter", Category::Dairy, 1),
        });

        let events = store.handle(&cmd).unwrap();
        assert_eq!(events.len(), 1);
        assert!(store.is_empty());

        let mut replayed = InventoryStore::new();
        for e in &events {
            replayed.apply(e);
        }
        assert_eq!(replayed.len(), 1);
        assert_eq!(replayed.items()[0].name(), "Butter");
        assert_eq!(events[0].event_type(), "inventory.item.added");
    }

    #[test]
    fn replaying_an_add_does_not_duplicate_the_id() {
        let mut store = InventoryStore::new();
        let events = store
            .handle(&InventoryCommand::AddItem(AddItem {
                candidate: candidate("Butter", Category::Dairy, 1),
            }))
            .unwrap();

        store.apply(&events[0]);
        store.apply(&events[0]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), 1);
        let next = store.add(candidate("Jam", Category::Other, 1));
        assert_ne!(next.id_typed(), store.items()[0].id_typed());
    }

    #[test]
    fn consumed_events_take_one_unit_each() {
        let mut store = InventoryStore::new();
        let yogurt = store.add(candidate("Yogurt", Category::Dairy, 3));
        let cmd = InventoryCommand::ConsumeItem(ConsumeItem {
            item_id: yogurt.id_typed(),
        });

        // Both decided against the same state, then both applied.
        let first = store.handle(&cmd).unwrap();
        let second = store.handle(&cmd).unwrap();
        for e in first.iter().chain(&second) {
            store.apply(e);
        }
        assert_eq!(store.get(yogurt.id_typed()).unwrap().quantity(), 1);

        store.apply(&first[0]);
        assert!(!store.contains(yogurt.id_typed()));

        // Stale events for an item that is gone change nothing.
        let version = store.version();
        store.apply(&second[0]);
        assert_eq!(store.version(), version);
        assert!(store.is_empty());
    }

    #[test]
    fn total_quantity_sums_matching_items() {
        let mut store = InventoryStore::new();
        assert_eq!(store.total_quantity(), 0);

        store.add(candidate("Cheese", Category::Dairy, 2));
        store.add(candidate("Apples", Category::Produce, 3));

        assert_eq!(store.total_quantity(), 5);
        assert_eq!(store.quantity_of(Category::Dairy), 2);
        assert_eq!(store.quantity_in(Location::Freezer), 0);
        assert_eq!(
            store.total_quantity_where(|item| item.name().starts_with('A')),
            3
        );
    }

    #[test]
    fn expiring_within_includes_expired_items() {
        let now = test_time();
        let mut store = InventoryStore::new();
        let expiring = |name: &str, days: i64| {
            NewItem::new(
                name,
                Category::Produce,
                Location::Fridge,
                1,
                now,
                now + Duration::days(days),
            )
            .unwrap()
        };
        let old = store.add(expiring("Old Milk", -2));
        let soon = store.add(expiring("Lettuce", 1));
        store.add(expiring("Carrot", 5));

        let ids: Vec<ItemId> = store
            .list_expiring_within(3, now)
            .into_iter()
            .map(Item::id_typed)
            .collect();
        assert_eq!(ids, vec![old.id_typed(), soon.id_typed()]);
        assert_eq!(
            store.get(soon.id_typed()).unwrap().freshness(now).status,
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn fridge_shelves_partition_with_top_shelf_default() {
        let mut store = InventoryStore::new();
        store.add(on_shelf("a", Some(Shelf::Top)));
        store.add(on_shelf("b", Some(Shelf::Middle)));
        store.add(on_shelf("c", Some(Shelf::Middle)));
        store.add(on_shelf("d", Some(Shelf::Bottom)));

        let sizes: Vec<usize> = store.group_fridge_by_shelf().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 2, 1]);

        store.add(on_shelf("e", None));
        let shelves = store.group_fridge_by_shelf();
        assert_eq!(shelves[0].len(), 2);
        assert_eq!(shelves[0][1].name(), "e");
    }

    #[test]
    fn freezer_items_are_not_on_fridge_shelves() {
        let mut store = InventoryStore::new();
        store.add(
            NewItem::new(
                "Ground Beef",
                Category::Meat,
                Location::Freezer,
                2,
                test_time(),
                test_time() + Duration::days(10),
            )
            .unwrap(),
        );

        assert!(store.group_fridge_by_shelf().iter().all(Vec::is_empty));
        assert_eq!(store.list_by_location(Location::Freezer).len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of adds/consumes/removes, ids stay
        /// unique, every quantity stays >= 1 and the total matches a model.
        #[test]
        fn invariants_hold_under_random_operations(
            ops in prop::collection::vec((0u8..3, 1u32..5, 0usize..8), 1..60)
        ) {
            let mut store = InventoryStore::new();
            let mut model: Vec<(ItemId, u32)> = Vec::new();

            for (op, quantity, pick) in ops {
                match op {
                    0 => {
                        let item = store.add(candidate("Item", Category::Other, quantity));
                        model.push((item.id_typed(), quantity));
                    }
                    1 if !model.is_empty() => {
                        let idx = pick % model.len();
                        let id = model[idx].0;
                        store.consume(id);
                        if model[idx].1 > 1 {
                            model[idx].1 -= 1;
                        } else {
                            model.remove(idx);
                        }
                    }
                    2 if !model.is_empty() => {
                        let idx = pick % model.len();
                        store.remove(model[idx].0);
                        model.remove(idx);
                    }
                    _ => {}
                }
            }

            let mut ids: Vec<ItemId> = store.iter().map(Item::id_typed).collect();
            let observed: Vec<(ItemId, u32)> = store
                .iter()
                .map(|item| (item.id_typed(), item.quantity()))
                .collect();
            prop_assert_eq!(&observed, &model);
            prop_assert!(store.iter().all(|item| item.quantity() >= 1));

            ids.dedup();
            prop_assert_eq!(ids.len(), store.len());
            let expected: u64 = model.iter().map(|(_, q)| u64::from(*q)).sum();
            prop_assert_eq!(store.total_quantity(), expected);
        }
    }
}
