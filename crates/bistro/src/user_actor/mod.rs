//! # User Actor
//!
//! The identity store: one actor managing every registered [`User`].
//!
//! The ordering core consumes this actor through
//! [`UserClient`](crate::clients::UserClient) as a plain identity lookup:
//! "does this principal exist, which groups is it in, is it staff". Group
//! membership changes (the manager flows) go through [`UserAction`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::User;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new User actor and its generic client.
pub fn new() -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(32)
}
