use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Where an item physically lives in the household.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    Fridge,
    Freezer,
    #[default]
    Pantry,
}

impl Location {
    pub fn label(&self) -> &'static str {
        match self {
            Location::Fridge => "Fridge",
            Location::Freezer => "Freezer",
            Location::Pantry => "Pantry",
        }
    }
}

/// Shelf-life category, drives the ageing rules.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Fresh,
    Chilled,
    MeatFish,
    Frozen,
    Pantry,
    #[default]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fresh => "Fresh produce",
            Category::Chilled => "Chilled",
            Category::MeatFish => "Meat & fish",
            Category::Frozen => "Frozen",
            Category::Pantry => "Pantry",
            Category::Other => "Other",
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    Low,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::Low => "Low",
            StockStatus::OutOfStock => "Out",
        }
    }
}

/// One row of the household inventory, as listed by the inventory store.
/// The matching and ageing code treats this as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub category: Category,
    pub stock_status: StockStatus,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
