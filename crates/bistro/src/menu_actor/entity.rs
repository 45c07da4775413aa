//! Entity trait implementation for the [`MenuItem`] domain type.

use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Filter = MenuFilter;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> MenuItemId {
        self.id
    }

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.title.is_empty() {
            return Err(MenuError::ValidationError(
                "title must not be empty".to_string(),
            ));
        }
        if params.price.is_sign_negative() {
            return Err(MenuError::InvalidPrice(params.price.to_string()));
        }
        Ok(Self {
            id,
            title: params.title,
            price: params.price,
            featured: params.featured,
            category: params.category,
        })
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        match filter {
            MenuFilter::All => true,
            MenuFilter::Featured => self.featured,
            MenuFilter::ByCategory(category) => self.category == *category,
        }
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            if price.is_sign_negative() {
                return Err(MenuError::InvalidPrice(price.to_string()));
            }
            self.price = price;
        }
        if let Some(title) = update.title {
            if title.is_empty() {
                return Err(MenuError::ValidationError(
                    "title must not be empty".to_string(),
                ));
            }
            self.title = title;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::SetFeatured(featured) => {
                let changed = self.featured != featured;
                self.featured = featured;
                Ok(MenuActionResult::SetFeatured(changed))
            }
        }
    }
}
