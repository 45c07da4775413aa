//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (user, menu item,
//! cart line, order, …) must implement to be managed by the generic `ResourceActor`.
//! It specifies associated types for ids, DTOs, actions, filters, context, and errors,
//! and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//! Implementing this trait gives any domain model a uniform CRUD + Action + collection API.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract that all our resource types must satisfy, we write the
//! `ResourceActor` logic *once* and reuse it for every store in the system.
//!
//! We use associated types (`type Id`, `type Create`, …) to enforce type safety:
//! a cart actor can only ever receive cart payloads. The compiler prevents the
//! wrong-payload class of bugs entirely.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can call other actors. The `Context`
/// associated type is injected into every hook, allowing "late binding" of
/// dependencies (clients are passed to `run()` instead of `new()`).
///
/// # Collection operations
/// Besides per-entity CRUD, the framework supports two collection-level requests,
/// `List` and `Drain`, both driven by the entity's [`Filter`](ActorEntity::Filter)
/// type and [`matches`](ActorEntity::matches) predicate. `Drain` removes and
/// returns every matching entity within a single actor message, which makes it a
/// compare-and-clear primitive: no other request can interleave with it.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic id generation, and `Ord` so
    /// the store iterates in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for the `List` and `Drain` collection requests.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// The framework enforces a per-actor error type (one enum for the whole
    /// actor) rather than per-message error types. A single `OrderError` must be
    /// the union of everything order operations can fail with; in exchange the
    /// clients pattern-match on one type and the boilerplate stays small.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's own id. Used for logging and for seeding a store from
    /// previously persisted entities.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this entity satisfies a collection filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed, before it is stored.
    /// Use this hook for validation or side effects against other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
