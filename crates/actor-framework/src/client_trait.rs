//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `get`, `list`, and `delete` methods built on top of the generic `ResourceClient`.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Domain clients (e.g. `OrderClient`) wrap a `ResourceClient<T>` to expose a
/// typed API. Implementing this trait gives them `get`, `list`, and `delete`
/// for free; only the inner accessor and the error mapping are required.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `ResourceClient`.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List entities matching a filter.
    #[tracing::instrument(skip(self, filter))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
