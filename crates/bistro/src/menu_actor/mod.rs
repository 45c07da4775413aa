//! # Menu Actor
//!
//! The menu catalog: title, current price, featured flag, category. Managers
//! curate it; the ordering core only ever reads prices from it (through
//! [`MenuClient::get_price`](crate::clients::MenuClient::get_price)) at the
//! moment a cart line is added.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Menu actor and its generic client.
pub fn new() -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(32)
}
