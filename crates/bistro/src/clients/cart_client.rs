//! Typed client for the Cart actor.
//!
//! Every method is scoped to one owner; the API has no way to ask for
//! somebody else's cart, which makes the router's job trivial.

use crate::cart_actor::CartError;
use crate::model::{CartFilter, CartLine, CartLineCreate, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }

    /// Adds a line to the owner's cart and returns it with its snapshotted
    /// price. Adding the same item twice yields two independent lines.
    #[tracing::instrument(skip(self, params))]
    pub async fn add_item(&self, params: CartLineCreate) -> Result<CartLine, CartError> {
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id).await?.ok_or_else(|| {
            CartError::ActorCommunicationError(format!("created line {id} missing"))
        })
    }

    /// The owner's current cart lines, in the order they were added.
    #[tracing::instrument(skip(self))]
    pub async fn list_for(&self, user: UserId) -> Result<Vec<CartLine>, CartError> {
        self.list(CartFilter::ByUser(user)).await
    }

    /// Empties the owner's cart. Returns how many lines were removed;
    /// clearing an already-empty cart is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn clear_for(&self, user: UserId) -> Result<usize, CartError> {
        let drained = self.take_for(user).await?;
        Ok(drained.len())
    }

    /// Atomically removes and returns the owner's cart lines. This is the
    /// primitive order placement is built on: no two callers can both
    /// receive the same lines.
    #[tracing::instrument(skip(self))]
    pub async fn take_for(&self, user: UserId) -> Result<Vec<CartLine>, CartError> {
        self.inner
            .drain(CartFilter::ByUser(user))
            .await
            .map_err(Self::map_error)
    }
}

impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::EntityError(boxed) => match boxed.downcast::<CartError>() {
                Ok(err) => *err,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
