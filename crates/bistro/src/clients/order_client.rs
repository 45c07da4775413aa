//! Typed client for the Order actor.

use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};

/// What came of a placement attempt.
///
/// An empty cart is a business outcome, not a failure: the caller asked to
/// order whatever is in the cart, and "nothing" is a valid answer. Keeping it
/// out of the error enum forces callers to handle it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOrderOutcome {
    /// The cart had lines; here is the frozen order.
    Placed(Order),
    /// The cart was empty. Nothing was created, nothing was charged.
    EmptyCart,
}

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Converts the user's cart into an order, atomically.
    ///
    /// If two submissions race, the order actor serializes them: one drains
    /// the cart and places the order, the other sees an empty cart and comes
    /// back as [`PlaceOrderOutcome::EmptyCart`].
    #[tracing::instrument(skip(self))]
    pub async fn place_order(&self, user: UserId) -> Result<PlaceOrderOutcome, OrderError> {
        let id = match self.inner.create(OrderCreate { placed_by: user }).await {
            Ok(id) => id,
            Err(e) => {
                return match Self::map_error(e) {
                    OrderError::EmptyCart => Ok(PlaceOrderOutcome::EmptyCart),
                    other => Err(other),
                }
            }
        };
        let order = self.get(id).await?.ok_or_else(|| {
            OrderError::ActorCommunicationError(format!("placed order {id} missing"))
        })?;
        Ok(PlaceOrderOutcome::Placed(order))
    }

    /// Assigns a delivery crew member to the order. The order actor verifies
    /// that the assignee actually carries the delivery role.
    #[tracing::instrument(skip(self))]
    pub async fn assign_crew(&self, id: OrderId, crew: UserId) -> Result<Order, OrderError> {
        self.inner
            .update(
                id,
                OrderUpdate {
                    delivery_crew: Some(crew),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Moves the order to the given fulfillment state.
    #[tracing::instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.inner
            .update(
                id,
                OrderUpdate {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .map_err(Self::map_error)
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(boxed) => match boxed.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
