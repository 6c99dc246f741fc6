use chrono::{DateTime, Duration, TimeZone, Utc};
use fridgekeeper_inventory::{
    Category, CategoryFilter, ExpiryStatus, InventoryStore, Item, ItemDraft, Location, NewItem,
    Shelf,
};

fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 14, 18, 45, 0).unwrap()
}

fn item(name: &str, category: Category, location: Location, days: i64) -> NewItem {
    let now = test_time();
    NewItem::new(name, category, location, 1, now, now + Duration::days(days)).unwrap()
}

#[test]
fn milk_expiring_in_two_days_shows_up_as_expiring_soon() {
    let now = test_time();
    let mut store = InventoryStore::new();
    let draft = ItemDraft {
        name: "Milk".to_string(),
        category: Category::Beverage,
        location: Location::Fridge,
        shelf: Some(0),
        quantity: 1,
        expiry_date: (now + Duration::days(2)).to_rfc3339(),
        icon: None,
    };
    let milk = store.add(draft.validate(now).unwrap());

    let expiring = store.list_expiring_within(3, now);
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].id_typed(), milk.id_typed());
    assert_eq!(expiring[0].freshness(now).status, ExpiryStatus::ExpiringSoon);
    assert_eq!(expiring[0].freshness(now).urgency_percent, 25);
}

#[test]
fn category_listing_over_mixed_inventory() {
    let mut store = InventoryStore::seeded([
        item("Milk", Category::Beverage, Location::Fridge, 2),
        item("Cheese", Category::Dairy, Location::Fridge, 10),
        item("Lettuce", Category::Produce, Location::Fridge, 1),
        item("Chicken Breast", Category::Meat, Location::Freezer, 10),
        item("Carrot", Category::Produce, Location::Fridge, 5),
        item("Ground Beef", Category::Meat, Location::Freezer, 10),
        item("Yogurt", Category::Dairy, Location::Fridge, 5),
        item("Orange Juice", Category::Beverage, Location::Fridge, 5),
        item("Frozen Pizza", Category::Other, Location::Freezer, 10),
        item("Butter", Category::Dairy, Location::Fridge, 20),
    ]);

    let dairy: Vec<&str> = store
        .list_by_category(Category::Dairy)
        .into_iter()
        .map(Item::name)
        .collect();
    assert_eq!(dairy, vec!["Cheese", "Yogurt", "Butter"]);
    assert_eq!(store.list_by_category(CategoryFilter::All).len(), 10);
    assert_eq!(
        store
            .list_by_category("all".parse::<CategoryFilter>().unwrap())
            .len(),
        10
    );

    let yogurt = store.list_by_category(Category::Dairy)[1].id_typed();
    store.consume(yogurt);
    assert!(
        store
            .list_by_category(Category::Dairy)
            .iter()
            .all(|i| i.id_typed() != yogurt)
    );
}

#[test]
fn added_item_is_listed_exactly_once() {
    let mut store = InventoryStore::seeded([
        item("Milk", Category::Beverage, Location::Fridge, 2),
        item("Frozen Pizza", Category::Other, Location::Freezer, 10),
    ]);
    let carrot =
        store.add(item("Carrot", Category::Produce, Location::Fridge, 5).with_shelf(Shelf::Bottom));

    let by_location = store.list_by_location(Location::Fridge);
    assert_eq!(
        by_location.iter().filter(|i| i.id_typed() == carrot.id_typed()).count(),
        1
    );
    let by_category = store.list_by_category(Category::Produce);
    assert_eq!(by_category, vec![&carrot]);
    assert_eq!(store.group_fridge_by_shelf()[Shelf::Bottom.index()], vec![&carrot]);
}
