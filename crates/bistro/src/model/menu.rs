use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// One dish on the menu. Read-only to the ordering core; managers curate it.
///
/// `price` is the *current* catalog price. Cart lines and order items snapshot
/// it at add time and never read it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category: String,
}

/// Payload for creating a new menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category: String,
}

/// Payload for updating an existing menu item.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub featured: Option<bool>,
    pub category: Option<String>,
}

/// Collection filter for the menu catalog.
#[derive(Debug, Clone)]
pub enum MenuFilter {
    All,
    Featured,
    ByCategory(String),
}
