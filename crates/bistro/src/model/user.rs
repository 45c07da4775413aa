use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A registered principal in the identity store.
///
/// Role is not stored on the user: it is resolved on demand from `is_staff`
/// and `groups` by [`RoleConfig::resolve`](crate::roles::RoleConfig::resolve),
/// so a group-membership change takes effect on the next request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Administrative privilege; counts as Manager for role resolution.
    pub is_staff: bool,
    pub groups: BTreeSet<String>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub is_staff: bool,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub email: Option<String>,
}

/// Collection filter for the user store.
#[derive(Debug, Clone)]
pub enum UserFilter {
    All,
    ByUsername(String),
    ByGroup(String),
}
