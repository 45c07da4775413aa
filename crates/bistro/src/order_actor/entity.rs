//! Entity trait implementation for the [`Order`] domain type.
//!
//! `on_create` is where cart-to-order conversion happens. Because the hook
//! runs inside the order actor's message loop, the drain-compute-store
//! sequence is atomic with respect to every other order request.

use crate::journal::OrderEvent;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderItem, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderContext, OrderError};
use crate::roles::Role;
use crate::user_actor::UserError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::error;

/// Orders expose no custom actions; everything goes through create/update.
#[derive(Debug, Clone)]
pub enum OrderAction {}

#[derive(Debug, Clone)]
pub enum OrderActionResult {}

fn journal_append(ctx: &OrderContext, event: OrderEvent) {
    if let Some(journal) = &ctx.journal {
        if let Err(e) = journal.append(&event) {
            error!(error = %e, "Journal append failed");
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = OrderFilter;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            placed_by: params.placed_by,
            status: OrderStatus::Pending,
            delivery_crew: None,
            placed_at: Utc::now(),
            total: Decimal::ZERO,
            items: Vec::new(),
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::ByCrew(crew) => self.delivery_crew == Some(*crew),
            OrderFilter::ByCustomer(customer) => self.placed_by == *customer,
        }
    }

    /// Drains the placing user's cart and freezes it into this order.
    ///
    /// An empty drain fails the creation with [`OrderError::EmptyCart`];
    /// nothing was removed, so there is nothing to restore. Once the drain
    /// returns lines, the remaining work is infallible and the order is
    /// guaranteed to be stored.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let lines = ctx
            .carts
            .take_for(self.placed_by)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;

        if lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        self.items = lines
            .into_iter()
            .map(|line| OrderItem {
                menu_item: line.menu_item,
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total,
            })
            .collect();
        self.total = self.items.iter().map(|item| item.line_total).sum();

        journal_append(ctx, OrderEvent::Created(self.clone()));
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, ctx: &OrderContext) -> Result<(), OrderError> {
        if let Some(crew) = update.delivery_crew {
            match ctx.users.resolve_role(crew).await {
                Ok(Role::Delivery) => self.delivery_crew = Some(crew),
                Ok(_) => return Err(OrderError::InvalidCrew(crew.to_string())),
                Err(UserError::NotFound(_)) => {
                    return Err(OrderError::InvalidCrew(crew.to_string()))
                }
                Err(e) => return Err(OrderError::ActorCommunicationError(e.to_string())),
            }
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        journal_append(ctx, OrderEvent::Updated(self.clone()));
        Ok(())
    }

    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        journal_append(ctx, OrderEvent::Deleted(self.id));
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {}
    }
}
