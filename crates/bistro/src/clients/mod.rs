//! # Typed Domain Clients
//!
//! Thin, cloneable wrappers around the generic `ResourceClient` that expose
//! domain vocabulary (`place_order`, `take_for`, `resolve_role`) instead of
//! raw CRUD, and translate `FrameworkError` into each actor's error enum.
//! Everything above this layer (the router, the tests) speaks only these
//! clients.

pub mod cart_client;
pub mod menu_client;
pub mod order_client;
pub mod user_client;

pub use cart_client::CartClient;
pub use menu_client::MenuClient;
pub use order_client::{OrderClient, PlaceOrderOutcome};
pub use user_client::UserClient;
