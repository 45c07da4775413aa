//! # Cart Actor
//!
//! Per-user staging area for pending cart lines. The interesting work happens
//! in the entity hooks: `on_create` snapshots the unit price from the menu
//! catalog (via the injected [`MenuClient`](crate::clients::MenuClient)), so a
//! later catalog price change never alters an existing line.
//!
//! The cart has no update path and no custom actions; lines are added,
//! listed, cleared, or drained wholesale into an order.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::CartLine;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Cart actor and its generic client.
///
/// The returned actor must be run with a [`MenuClient`](crate::clients::MenuClient)
/// context so price snapshotting can reach the catalog.
pub fn new() -> (ResourceActor<CartLine>, ResourceClient<CartLine>) {
    ResourceActor::new(32)
}
