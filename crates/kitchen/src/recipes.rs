//! Recipe suggestions from what is in the fridge.

use serde::{Deserialize, Serialize};

use fridgekeeper_inventory::InventoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    /// Lower-case ingredient names matched against item names.
    pub ingredients: Vec<String>,
    pub cooking_minutes: u32,
    pub difficulty: Difficulty,
}

/// Outcome of checking one recipe against the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCheck<'a> {
    pub recipe: &'a Recipe,
    pub missing: Vec<&'a str>,
}

impl IngredientCheck<'_> {
    pub fn can_make(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The recipes that ship with the app.
    pub fn builtin() -> Self {
        fn recipe(
            name: &str,
            description: &str,
            ingredients: &[&str],
            cooking_minutes: u32,
        ) -> Recipe {
            Recipe {
                name: name.to_string(),
                description: description.to_string(),
                ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
                cooking_minutes,
                difficulty: Difficulty::Easy,
            }
        }

        Self::new(vec![
            recipe(
                "Vegetable Stir Fry",
                "A quick and healthy stir fry using vegetables from your fridge",
                &["carrot", "lettuce", "chicken breast"],
                20,
            ),
            recipe(
                "Cheese Omelette",
                "Simple and delicious breakfast option",
                &["eggs", "cheese", "milk"],
                10,
            ),
            recipe(
                "Chicken Salad",
                "Fresh and nutritious salad with chicken",
                &["chicken breast", "lettuce", "tomato"],
                15,
            ),
        ])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Check a recipe: an ingredient is on hand when some item name contains
    /// it, ignoring case.
    pub fn check<'a>(&self, recipe: &'a Recipe, store: &InventoryStore) -> IngredientCheck<'a> {
        let names: Vec<String> = store.iter().map(|item| item.name().to_lowercase()).collect();
        check_against(recipe, &names)
    }

    /// Every recipe with its missing ingredients, in book order.
    pub fn suggestions(&self, store: &InventoryStore) -> Vec<IngredientCheck<'_>> {
        let names: Vec<String> = store.iter().map(|item| item.name().to_lowercase()).collect();
        self.recipes
            .iter()
            .map(|recipe| check_against(recipe, &names))
            .collect()
    }

    /// Recipes that can be made right now.
    pub fn makeable(&self, store: &InventoryStore) -> Vec<&Recipe> {
        self.suggestions(store)
            .into_iter()
            .filter(|check| check.can_make())
            .map(|check| check.recipe)
            .collect()
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_against<'a>(recipe: &'a Recipe, item_names: &[String]) -> IngredientCheck<'a> {
    let missing = recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            let wanted = ingredient.to_lowercase();
            !item_names.iter().any(|name| name.contains(&wanted))
        })
        .map(String::as_str)
        .collect();
    IngredientCheck { recipe, missing }
}
