//! Typed client for the Menu actor.

use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;

#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds a dish to the catalog.
    #[tracing::instrument(skip(self, params))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Current catalog price of one item. This is what the cart snapshots.
    #[tracing::instrument(skip(self))]
    pub async fn get_price(&self, id: MenuItemId) -> Result<Decimal, MenuError> {
        let item = self
            .get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))?;
        Ok(item.price)
    }

    /// The dishes currently flagged as featured.
    #[tracing::instrument(skip(self))]
    pub async fn featured(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list(MenuFilter::Featured).await
    }

    /// All dishes in one category.
    #[tracing::instrument(skip(self))]
    pub async fn in_category(&self, category: &str) -> Result<Vec<MenuItem>, MenuError> {
        self.list(MenuFilter::ByCategory(category.to_string())).await
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Toggles the featured flag. Returns whether it changed.
    #[tracing::instrument(skip(self))]
    pub async fn set_featured(&self, id: MenuItemId, featured: bool) -> Result<bool, MenuError> {
        match self
            .inner
            .perform_action(id, MenuAction::SetFeatured(featured))
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::SetFeatured(changed) => Ok(changed),
        }
    }
}

impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> MenuError {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(boxed) => match boxed.downcast::<MenuError>() {
                Ok(err) => *err,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
