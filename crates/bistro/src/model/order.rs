use crate::model::{MenuItemId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfillment state of an order.
///
/// Two states only. The wire literals "0" (pending) and "1" (delivered) are
/// accepted at the router boundary; the domain never sees raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl OrderStatus {
    /// Parses a PATCH-body literal. Anything outside the two accepted values
    /// is a validation error, handled by the caller.
    pub fn from_wire(literal: &str) -> Option<Self> {
        match literal {
            "0" => Some(OrderStatus::Pending),
            "1" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

/// A frozen price/quantity snapshot belonging to exactly one order.
///
/// Copied from the cart lines that produced the order; never recomputed from
/// the current menu price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item: MenuItemId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// An immutable-after-creation commercial transaction record.
///
/// `total` equals the sum of `items` line totals at creation time and is never
/// re-derived. Items are embedded, so deleting an order structurally deletes
/// its items; no orphan can exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_by: UserId,
    pub status: OrderStatus,
    pub delivery_crew: Option<UserId>,
    pub placed_at: DateTime<Utc>,
    pub total: Decimal,
    pub items: Vec<OrderItem>,
}

/// Payload for placing an order. The items come from the placing user's cart,
/// drained atomically by the order actor; there is nothing else to say here.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub placed_by: UserId,
}

/// Payload for mutating an order: crew assignment (PUT) and status change
/// (PATCH) both arrive here. `placed_by`, `total`, and `items` have no update
/// path by design.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub delivery_crew: Option<UserId>,
    pub status: Option<OrderStatus>,
}

/// Role-scoped visibility filter for order listings.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Manager view: everything.
    All,
    /// Delivery view: only orders assigned to this crew member.
    ByCrew(UserId),
    /// Customer view: only orders this user placed.
    ByCustomer(UserId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_literals_map_to_the_two_states() {
        assert_eq!(OrderStatus::from_wire("0"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::from_wire("1"), Some(OrderStatus::Delivered));
    }

    #[test]
    fn anything_else_is_rejected() {
        for bad in ["2", "", "true", "delivered", "01", " 1"] {
            assert_eq!(OrderStatus::from_wire(bad), None, "literal {bad:?}");
        }
    }
}
