//! # Bistro
//!
//! A multi-role restaurant ordering backend built on the resource-actor
//! framework. Customers stage cart lines and convert them into orders;
//! managers run the catalog, assign delivery crew, and manage the order
//! ledger; delivery crew mark their assigned orders delivered.
//!
//! ## Layout
//!
//! - **[model]**: pure data types (users, menu items, cart lines, orders).
//! - **`*_actor` modules**: one resource actor per store, with the domain
//!   logic in entity hooks (price snapshotting, cart-to-order conversion,
//!   crew validation).
//! - **[clients]**: typed wrappers over the generic actor clients.
//! - **[roles]**: group membership → `Manager`/`Delivery`/`Customer`.
//! - **[router]**: the role-scoped (method, role) dispatch tables and the
//!   only place raw request strings are parsed.
//! - **[journal]**: JSON-lines durability for the order ledger.
//! - **[lifecycle]**: assembles and shuts down the whole system.

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod journal;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod query;
pub mod roles;
pub mod router;
pub mod user_actor;
