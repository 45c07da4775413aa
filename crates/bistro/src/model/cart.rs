use crate::model::{MenuItemId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CartLineId(pub u32);

impl From<u32> for CartLineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// A pending, not-yet-ordered quantity of one menu item for one user.
///
/// `unit_price` is captured from the catalog when the line is added and never
/// re-read: a later catalog price change must not alter an existing line.
/// Adding the same item twice produces two independent lines, possibly at
/// different historical prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub user: UserId,
    pub menu_item: MenuItemId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Payload for adding a line to a cart. The price fields are filled in by the
/// cart actor from the menu catalog; callers only say what and how many.
#[derive(Debug, Clone)]
pub struct CartLineCreate {
    pub user: UserId,
    pub menu_item: MenuItemId,
    pub quantity: u32,
}

/// Collection filter for the cart store. Every cart operation is scoped to a
/// single owner; there is deliberately no "all carts" view.
#[derive(Debug, Clone)]
pub enum CartFilter {
    ByUser(UserId),
}
