//! # Actor Framework
//!
//! This crate provides the foundational building blocks for creating type-safe,
//! concurrent actor systems in Rust. It implements a **Resource-Oriented
//! Architecture (ROA)** pattern on top of the **Actor Model**, providing a clean
//! abstraction for managing stateful entities.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard CRUD operations on well-defined resources
//! - Predictable lifecycle management
//! - Uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! ### The Synergy
//!
//! Each resource type gets its own actor with completely isolated state. When
//! resources need to coordinate, they communicate through clients injected as
//! context rather than shared memory. Because an actor handles one message at a
//! time, multi-step collection operations (notably [`Drain`], which removes and
//! returns everything matching a filter) are atomic without any locking. That
//! is the primitive an order ledger needs to convert a cart into an order
//! without double-submission races.
//!
//! [`Drain`]: message::ResourceRequest::Drain
//!
//! **Further reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity layer** ([`ActorEntity`]): your business logic and domain models
//! 2. **Runtime layer** ([`ResourceActor`]): message processing and concurrency
//! 3. **Interface layer** ([`ResourceClient`]): type-safe communication
//!
//! You write the business logic once in the entity trait; the framework handles
//! the async message passing, error propagation, and state management.
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct UserCreate { name: String }
//! #[derive(Debug)] struct UserUpdate { name: Option<String> }
//! #[derive(Debug)] enum UserAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct UserError(String);
//!
//! #[async_trait]
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Create = UserCreate;
//!     type Update = UserUpdate;
//!     type Action = UserAction;
//!     type ActionResult = ();
//!     type Filter = ();
//!     type Context = ();
//!     type Error = UserError;
//!
//!     fn id(&self) -> u32 { self.id }
//!
//!     fn from_create_params(id: u32, params: UserCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn matches(&self, _: &()) -> bool { true }
//!
//!     async fn on_update(&mut self, update: UserUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: UserAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<User>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(UserCreate { name: "Alice".into() }).await.unwrap();
//!     let user = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(user.name, "Alice");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at
//! construction time. This "late binding" solves circular dependencies: create
//! every actor first (no dependencies yet), then start each one with the
//! clients it needs:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = ResourceActor::<CartLine>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(cart_actor.run(menu_client.clone()));
//! tokio::spawn(order_actor.run(OrderContext::new(cart_client.clone(), user_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Multiple actors run in **parallel**
//! - No shared mutable state (message passing only)
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that implements the same
//! `ResourceClient<T>` API as the real client but answers from an expectation
//! queue, entirely in-memory. It lets you write fast, deterministic unit tests
//! for client logic without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
