//! Pure data structures for the restaurant domain.
//!
//! Each entity here implements the
//! [`ActorEntity`](actor_framework::ActorEntity) trait in its corresponding
//! `*_actor` module, which is what lets a
//! [`ResourceActor`](actor_framework::ResourceActor) manage it.

pub mod cart;
pub mod menu;
pub mod order;
pub mod user;

pub use cart::{CartFilter, CartLine, CartLineCreate, CartLineId};
pub use menu::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{
    Order, OrderCreate, OrderFilter, OrderId, OrderItem, OrderStatus, OrderUpdate,
};
pub use user::{User, UserCreate, UserFilter, UserId, UserUpdate};
