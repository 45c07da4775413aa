//! Role resolution for authenticated principals.
//!
//! A principal's role is never stored; it is derived from staff status and
//! group membership each time it is needed. The group names come from
//! [`RoleConfig`], resolved once at startup and passed in explicitly; there is
//! no global group-name state and no live query at module load.

use crate::model::User;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the three mutually exclusive roles in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Delivery,
    Customer,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Manager => write!(f, "manager"),
            Role::Delivery => write!(f, "delivery"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

/// Group names that grant the Manager and Delivery roles.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfig {
    pub manager_group: String,
    pub delivery_group: String,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            manager_group: "Manager".to_string(),
            delivery_group: "Delivery crew".to_string(),
        }
    }
}

impl RoleConfig {
    /// Resolves a user's role with fixed precedence: Manager strictly before
    /// Delivery, so a principal in both groups is a Manager. Staff privilege
    /// counts as Manager. No membership at all means Customer; the default
    /// role requires nothing.
    pub fn resolve(&self, user: &User) -> Role {
        if user.is_staff || user.groups.contains(&self.manager_group) {
            Role::Manager
        } else if user.groups.contains(&self.delivery_group) {
            Role::Delivery
        } else {
            Role::Customer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use std::collections::BTreeSet;

    fn user(is_staff: bool, groups: &[&str]) -> User {
        User {
            id: UserId(1),
            username: "u".to_string(),
            email: "u@example.com".to_string(),
            is_staff,
            groups: groups.iter().map(|g| g.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn no_membership_means_customer() {
        let config = RoleConfig::default();
        assert_eq!(config.resolve(&user(false, &[])), Role::Customer);
    }

    #[test]
    fn staff_resolves_to_manager() {
        let config = RoleConfig::default();
        assert_eq!(config.resolve(&user(true, &[])), Role::Manager);
    }

    #[test]
    fn delivery_group_resolves_to_delivery() {
        let config = RoleConfig::default();
        assert_eq!(
            config.resolve(&user(false, &["Delivery crew"])),
            Role::Delivery
        );
    }

    #[test]
    fn manager_precedence_beats_delivery_membership() {
        let config = RoleConfig::default();
        assert_eq!(
            config.resolve(&user(false, &["Delivery crew", "Manager"])),
            Role::Manager
        );
    }

    #[test]
    fn unrelated_groups_do_not_grant_roles() {
        let config = RoleConfig::default();
        assert_eq!(
            config.resolve(&user(false, &["Book club"])),
            Role::Customer
        );
    }

    #[test]
    fn custom_group_names_are_respected() {
        let config = RoleConfig {
            manager_group: "shift-leads".to_string(),
            delivery_group: "riders".to_string(),
        };
        assert_eq!(config.resolve(&user(false, &["riders"])), Role::Delivery);
        assert_eq!(
            config.resolve(&user(false, &["Manager"])),
            Role::Customer,
            "the default name grants nothing once renamed"
        );
    }
}
