//! Typed client for the User actor, plus role resolution.
//!
//! The client owns the [`RoleConfig`], so "what can this user do" is answered
//! here from live group membership; there is no cached role table to go
//! stale when a group assignment changes.

use crate::model::{User, UserCreate, UserFilter, UserId, UserUpdate};
use crate::roles::{Role, RoleConfig};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    roles: RoleConfig,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>, roles: RoleConfig) -> Self {
        Self { inner, roles }
    }

    /// Registers a new user.
    #[tracing::instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks up a user by exact username.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let mut matches = self
            .inner
            .list(UserFilter::ByUsername(username.to_string()))
            .await
            .map_err(Self::map_error)?;
        Ok(matches.pop())
    }

    /// Resolves the effective role of a user from current group membership.
    ///
    /// Fails with [`UserError::NotFound`] for unknown ids, which callers use
    /// to distinguish "no such user" from "wrong role".
    #[tracing::instrument(skip(self))]
    pub async fn resolve_role(&self, id: UserId) -> Result<Role, UserError> {
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        Ok(self.roles.resolve(&user))
    }

    /// Changes the user's contact email. Username and staff status have no
    /// update path.
    #[tracing::instrument(skip(self, email))]
    pub async fn update_email(&self, id: UserId, email: String) -> Result<User, UserError> {
        self.inner
            .update(id, UserUpdate { email: Some(email) })
            .await
            .map_err(Self::map_error)
    }

    /// Every current member of `group`, in registration order. Manager flows
    /// use this to review who holds a role-granting group.
    #[tracing::instrument(skip(self))]
    pub async fn members_of(&self, group: &str) -> Result<Vec<User>, UserError> {
        self.list(UserFilter::ByGroup(group.to_string())).await
    }

    /// Whether the user is currently a member of `group`.
    #[tracing::instrument(skip(self))]
    pub async fn has_role(&self, id: UserId, group: &str) -> Result<bool, UserError> {
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        Ok(user.groups.contains(group))
    }

    /// Whether the user is a site admin (`is_staff`).
    #[tracing::instrument(skip(self))]
    pub async fn is_admin(&self, id: UserId) -> Result<bool, UserError> {
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        Ok(user.is_staff)
    }

    /// Adds the user to a group. Returns whether membership changed.
    #[tracing::instrument(skip(self))]
    pub async fn join_group(&self, id: UserId, group: &str) -> Result<bool, UserError> {
        match self
            .inner
            .perform_action(id, UserAction::JoinGroup(group.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            UserActionResult::JoinGroup(changed) | UserActionResult::LeaveGroup(changed) => {
                Ok(changed)
            }
        }
    }

    /// Removes the user from a group. Returns whether membership changed.
    #[tracing::instrument(skip(self))]
    pub async fn leave_group(&self, id: UserId, group: &str) -> Result<bool, UserError> {
        match self
            .inner
            .perform_action(id, UserAction::LeaveGroup(group.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            UserActionResult::JoinGroup(changed) | UserActionResult::LeaveGroup(changed) => {
                Ok(changed)
            }
        }
    }

    pub fn role_config(&self) -> &RoleConfig {
        &self.roles
    }
}

impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> UserError {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(boxed) => match boxed.downcast::<UserError>() {
                Ok(err) => *err,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
