//! Starter inventory shown on first launch.

use chrono::{DateTime, Duration, Utc};

use fridgekeeper_core::DomainResult;
use fridgekeeper_inventory::{Category, FoodIcon, Location, NewItem, Shelf};

/// Ten items with added/expiry dates relative to `now`.
pub fn sample_inventory(now: DateTime<Utc>) -> DomainResult<Vec<NewItem>> {
    use Category::*;
    use Location::*;

    let rows: [(&str, Category, Location, Option<Shelf>, u32, i64, i64, FoodIcon); 10] = [
        ("Milk", Beverage, Fridge, Some(Shelf::Top), 1, -2, 2, FoodIcon::Milk),
        ("Cheese", Dairy, Fridge, Some(Shelf::Middle), 2, -1, 10, FoodIcon::Cheese),
        ("Lettuce", Produce, Fridge, Some(Shelf::Middle), 1, -1, 1, FoodIcon::Lettuce),
        ("Chicken Breast", Meat, Freezer, None, 1, -2, 10, FoodIcon::Chicken),
        ("Carrot", Produce, Fridge, Some(Shelf::Bottom), 1, -2, 5, FoodIcon::Carrot),
        ("Ground Beef", Meat, Freezer, None, 2, -1, 10, FoodIcon::Beef),
        ("Yogurt", Dairy, Fridge, Some(Shelf::Top), 3, -1, 5, FoodIcon::Yogurt),
        ("Orange Juice", Beverage, Fridge, Some(Shelf::Top), 1, -2, 5, FoodIcon::Juice),
        ("Frozen Pizza", Other, Freezer, None, 1, -1, 10, FoodIcon::Pizza),
        ("Apples", Produce, Fridge, Some(Shelf::Bottom), 4, -1, 5, FoodIcon::Apple),
    ];

    rows.into_iter()
        .map(|row| -> DomainResult<NewItem> {
            let (name, category, location, shelf, quantity, added, expires, icon) = row;
            let candidate = NewItem::new(
                name,
                category,
                location,
                quantity,
                now + Duration::days(added),
                now + Duration::days(expires),
            )?
            .with_icon(icon.asset_path());
            Ok(match shelf {
                Some(shelf) => candidate.with_shelf(shelf),
                None => candidate,
            })
        })
        .collect()
}
