//! Entity trait implementation for the [`CartLine`] domain type.
//!
//! Price snapshotting lives here: the line is constructed with zeroed price
//! fields and `on_create` fills them from the live catalog, exactly once.

use crate::cart_actor::CartError;
use crate::clients::MenuClient;
use crate::menu_actor::MenuError;
use crate::model::{CartFilter, CartLine, CartLineCreate, CartLineId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The cart exposes no custom actions.
#[derive(Debug, Clone)]
pub enum CartAction {}

#[derive(Debug, Clone)]
pub enum CartActionResult {}

#[async_trait]
impl ActorEntity for CartLine {
    type Id = CartLineId;
    type Create = CartLineCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Filter = CartFilter;
    type Context = MenuClient;
    type Error = CartError;

    fn id(&self) -> CartLineId {
        self.id
    }

    fn from_create_params(id: CartLineId, params: CartLineCreate) -> Result<Self, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity(params.quantity));
        }
        Ok(Self {
            id,
            user: params.user,
            menu_item: params.menu_item,
            quantity: params.quantity,
            unit_price: Decimal::ZERO,
            line_total: Decimal::ZERO,
        })
    }

    fn matches(&self, filter: &CartFilter) -> bool {
        match filter {
            CartFilter::ByUser(user) => self.user == *user,
        }
    }

    /// Snapshots the current catalog price onto the line. This is the only
    /// moment the cart ever reads the menu.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), CartError> {
        let unit_price = menu.get_price(self.menu_item).await.map_err(|e| match e {
            MenuError::NotFound(_) => CartError::UnknownMenuItem(self.menu_item.to_string()),
            other => CartError::ActorCommunicationError(other.to_string()),
        })?;
        self.unit_price = unit_price;
        self.line_total = unit_price * Decimal::from(self.quantity);
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &MenuClient) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &MenuClient,
    ) -> Result<CartActionResult, CartError> {
        match action {}
    }
}
