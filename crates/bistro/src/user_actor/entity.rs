//! Entity trait implementation for the [`User`] domain type.

use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Filter = UserFilter;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> UserId {
        self.id
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        if params.username.is_empty() {
            return Err(UserError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            username: params.username,
            email: params.email,
            is_staff: params.is_staff,
            groups: BTreeSet::new(),
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::All => true,
            UserFilter::ByUsername(name) => self.username == *name,
            UserFilter::ByGroup(group) => self.groups.contains(group),
        }
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &(),
    ) -> Result<UserActionResult, UserError> {
        match action {
            UserAction::JoinGroup(group) => {
                let changed = self.groups.insert(group);
                Ok(UserActionResult::JoinGroup(changed))
            }
            UserAction::LeaveGroup(group) => {
                let changed = self.groups.remove(&group);
                Ok(UserActionResult::LeaveGroup(changed))
            }
        }
    }
}
