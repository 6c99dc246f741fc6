//! Built-in food icon catalog offered by the add-item form.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fridgekeeper_core::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodIcon {
    Milk,
    Cheese,
    Yogurt,
    Eggs,
    Butter,
    Chicken,
    Beef,
    Fish,
    Apple,
    Banana,
    Orange,
    Carrot,
    Lettuce,
    Tomato,
    Bread,
    Pizza,
    Water,
    Juice,
    Soda,
    Default,
}

impl FoodIcon {
    pub const ALL: [FoodIcon; 20] = [
        FoodIcon::Milk,
        FoodIcon::Cheese,
        FoodIcon::Yogurt,
        FoodIcon::Eggs,
        FoodIcon::Butter,
        FoodIcon::Chicken,
        FoodIcon::Beef,
        FoodIcon::Fish,
        FoodIcon::Apple,
        FoodIcon::Banana,
        FoodIcon::Orange,
        FoodIcon::Carrot,
        FoodIcon::Lettuce,
        FoodIcon::Tomato,
        FoodIcon::Bread,
        FoodIcon::Pizza,
        FoodIcon::Water,
        FoodIcon::Juice,
        FoodIcon::Soda,
        FoodIcon::Default,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FoodIcon::Milk => "milk",
            FoodIcon::Cheese => "cheese",
            FoodIcon::Yogurt => "yogurt",
            FoodIcon::Eggs => "eggs",
            FoodIcon::Butter => "butter",
            FoodIcon::Chicken => "chicken",
            FoodIcon::Beef => "beef",
            FoodIcon::Fish => "fish",
            FoodIcon::Apple => "apple",
            FoodIcon::Banana => "banana",
            FoodIcon::Orange => "orange",
            FoodIcon::Carrot => "carrot",
            FoodIcon::Lettuce => "lettuce",
            FoodIcon::Tomato => "tomato",
            FoodIcon::Bread => "bread",
            FoodIcon::Pizza => "pizza",
            FoodIcon::Water => "water",
            FoodIcon::Juice => "juice",
            FoodIcon::Soda => "soda",
            FoodIcon::Default => "default",
        }
    }

    /// Asset reference stored on the item.
    pub fn asset_path(&self) -> &'static str {
        match self {
            FoodIcon::Milk => "/milk.png",
            FoodIcon::Cheese => "/cheese.png",
            FoodIcon::Yogurt => "/placeholder.svg?height=100&width=80&text=🥄",
            FoodIcon::Eggs => "/egg.png",
            FoodIcon::Butter => "/placeholder.svg?height=100&width=80&text=🧈",
            FoodIcon::Chicken => "/chicken.png",
            FoodIcon::Beef => "/meat2.png",
            FoodIcon::Fish => "/placeholder.svg?height=100&width=80&text=🐟",
            FoodIcon::Apple => "/apple.png",
            FoodIcon::Banana => "/placeholder.svg?height=100&width=80&text=🍌",
            FoodIcon::Orange => "/placeholder.svg?height=100&width=80&text=🍊",
            FoodIcon::Carrot => "/carrot.png",
            FoodIcon::Lettuce => "/lettuce.png",
            FoodIcon::Tomato => "/placeholder.svg?height=100&width=80&text=🍅",
            FoodIcon::Bread => "/bread.png",
            FoodIcon::Pizza => "/placeholder.svg?height=100&width=80&text=🍕",
            FoodIcon::Water => "/placeholder.svg?height=100&width=80&text=💧",
            FoodIcon::Juice => "/placeholder.svg?height=100&width=80&text=🧃",
            FoodIcon::Soda => "/placeholder.svg?height=100&width=80&text=🥤",
            FoodIcon::Default => "/placeholder.svg?height=100&width=80&text=🍽️",
        }
    }
}

impl FromStr for FoodIcon {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FoodIcon::ALL
            .into_iter()
            .find(|icon| icon.name() == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown food icon: {s:?}")))
    }
}
