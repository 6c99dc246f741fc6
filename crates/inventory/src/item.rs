use core::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use fridgekeeper_core::{DomainError, DomainResult, Entity, ItemId};

use crate::expiry::{self, Freshness};
use crate::icon::FoodIcon;

/// Food category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Produce,
    Meat,
    Beverage,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Dairy,
        Category::Produce,
        Category::Meat,
        Category::Beverage,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Beverage => "beverage",
            Category::Other => "other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dairy" => Ok(Category::Dairy),
            "produce" => Ok(Category::Produce),
            "meat" => Ok(Category::Meat),
            "beverage" => Ok(Category::Beverage),
            "other" => Ok(Category::Other),
            other => Err(DomainError::validation(format!("unknown category: {other:?}"))),
        }
    }
}

/// Category selection used by list and shelf views.
///
/// `All` is a sentinel, not a category: it matches every item. Serialized as
/// `"all"` or the category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

/// Storage compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Fridge,
    Freezer,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Fridge => "fridge",
            Location::Freezer => "freezer",
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fridge" => Ok(Location::Fridge),
            "freezer" => Ok(Location::Freezer),
            other => Err(DomainError::validation(format!("unknown location: {other:?}"))),
        }
    }
}

/// Number of shelves in the fridge compartment.
pub const FRIDGE_SHELVES: usize = 3;

/// Fridge shelf, top to bottom. Serialized as its index (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shelf {
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

impl Shelf {
    pub const ALL: [Shelf; FRIDGE_SHELVES] = [Shelf::Top, Shelf::Middle, Shelf::Bottom];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Shelf {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Shelf::Top),
            1 => Ok(Shelf::Middle),
            2 => Ok(Shelf::Bottom),
            other => Err(DomainError::validation(format!(
                "shelf must be 0, 1 or 2 (got {other})"
            ))),
        }
    }
}

impl From<Shelf> for u8 {
    fn from(value: Shelf) -> Self {
        value as u8
    }
}

/// Entity: one inventory record.
///
/// Items are only created by [`InventoryStore::add`](crate::InventoryStore::add),
/// which assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    location: Location,
    shelf: Option<Shelf>,
    quantity: u32,
    added_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    icon: String,
}

impl Item {
    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Fridge shelf, if one was chosen. Always `None` for freezer items.
    pub fn shelf(&self) -> Option<Shelf> {
        self.shelf
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn freshness(&self, now: DateTime<Utc>) -> Freshness {
        expiry::classify(self.expires_at, now)
    }

    /// Whether the expiry date lies before the date the item was added.
    pub fn is_backdated(&self) -> bool {
        self.expires_at < self.added_at
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A validated candidate for [`InventoryStore::add`](crate::InventoryStore::add).
///
/// Carries no id: the store always assigns a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    category: Category,
    location: Location,
    shelf: Option<Shelf>,
    quantity: u32,
    added_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    icon: Option<String>,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        location: Location,
        quantity: u32,
        added_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        Ok(Self {
            name,
            category,
            location,
            shelf: None,
            quantity,
            added_at,
            expires_at,
            icon: None,
        })
    }

    pub fn with_shelf(mut self, shelf: Shelf) -> Self {
        self.shelf = Some(shelf);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        let shelf = match self.location {
            Location::Fridge => self.shelf,
            Location::Freezer => None,
        };
        Item {
            id,
            name: self.name,
            category: self.category,
            location: self.location,
            shelf,
            quantity: self.quantity,
            added_at: self.added_at,
            expires_at: self.expires_at,
            icon: self
                .icon
                .unwrap_or_else(|| FoodIcon::Default.asset_path().to_string()),
        }
    }
}

/// Re-adding an existing item: the old id is dropped.
impl From<Item> for NewItem {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            category: item.category,
            location: item.location,
            shelf: item.shelf,
            quantity: item.quantity,
            added_at: item.added_at,
            expires_at: item.expires_at,
            icon: Some(item.icon),
        }
    }
}

/// Raw "add item" form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub location: Location,
    pub shelf: Option<u8>,
    pub quantity: i64,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub expiry_date: String,
    pub icon: Option<String>,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Other,
            location: Location::Fridge,
            shelf: None,
            quantity: 1,
            expiry_date: String::new(),
            icon: None,
        }
    }
}

impl ItemDraft {
    /// Validate the form input into an addable candidate, stamped as added at `now`.
    pub fn validate(&self, now: DateTime<Utc>) -> DomainResult<NewItem> {
        let quantity = u32::try_from(self.quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| DomainError::validation("quantity must be at least 1"))?;
        let expires_at = parse_expiry_date(&self.expiry_date)?;

        let mut candidate = NewItem::new(
            self.name.as_str(),
            self.category,
            self.location,
            quantity,
            now,
            expires_at,
        )?;
        if let Some(raw) = self.shelf {
            candidate = candidate.with_shelf(Shelf::try_from(raw)?);
        }
        if let Some(icon) = self.icon.as_deref().map(str::trim).filter(|i| !i.is_empty()) {
            candidate = candidate.with_icon(icon);
        }
        Ok(candidate)
    }
}

/// Parse an expiry date as entered by a user or produced by a date picker.
///
/// Accepts full RFC 3339 timestamps and bare calendar dates, the latter taken
/// as midnight UTC.
pub fn parse_expiry_date(raw: &str) -> DomainResult<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::validation("expiry date is required"));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DomainError::validation(format!("invalid expiry date {raw:?}: {e}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| DomainError::validation(format!("invalid expiry date {raw:?}")))?;
    Ok(Utc.from_utc_datetime(&midnight))
}
