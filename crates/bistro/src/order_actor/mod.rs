//! # Order Actor
//!
//! The heart of the system. Placing an order drains the customer's cart and
//! freezes it into an immutable order inside a single actor message, so two
//! concurrent submissions from the same customer can never bill twice: the
//! second drain finds an empty cart and the placement is a no-op.
//!
//! The actor's context carries the cart and identity clients plus an optional
//! journal handle; every mutation that succeeds is appended to the journal.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CartClient, UserClient};
use crate::journal::OrderJournal;
use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Dependencies injected into the Order actor's run loop.
pub struct OrderContext {
    /// Drained when an order is placed.
    pub carts: CartClient,
    /// Consulted to validate delivery-crew assignments.
    pub users: UserClient,
    /// Durability sink; `None` disables journaling (e.g. in tests).
    pub journal: Option<Arc<OrderJournal>>,
}

/// Creates a new, empty Order actor and its generic client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}

/// Creates an Order actor seeded from journal replay.
pub fn with_store(orders: Vec<Order>, next_id: u32) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::with_store(32, orders, next_id)
}
