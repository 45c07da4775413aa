//! Startup configuration.
//!
//! All knobs are read from the environment exactly once, at startup, and the
//! resulting values are passed explicitly to the components that need them.

use crate::roles::RoleConfig;
use std::path::PathBuf;

/// Environment variable overriding the Manager group name.
pub const ENV_MANAGER_GROUP: &str = "BISTRO_MANAGER_GROUP";
/// Environment variable overriding the Delivery group name.
pub const ENV_DELIVERY_GROUP: &str = "BISTRO_DELIVERY_GROUP";
/// Environment variable pointing at the order journal file. Unset disables
/// durability (useful in tests).
pub const ENV_ORDER_JOURNAL: &str = "BISTRO_ORDER_JOURNAL";

/// Application configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub roles: RoleConfig,
    /// Path of the JSON-lines order journal; `None` keeps orders in memory only.
    pub journal_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roles: RoleConfig::default(),
            journal_path: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut roles = RoleConfig::default();
        if let Ok(name) = std::env::var(ENV_MANAGER_GROUP) {
            if !name.is_empty() {
                roles.manager_group = name;
            }
        }
        if let Ok(name) = std::env::var(ENV_DELIVERY_GROUP) {
            if !name.is_empty() {
                roles.delivery_group = name;
            }
        }
        let journal_path = std::env::var(ENV_ORDER_JOURNAL)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self {
            roles,
            journal_path,
        }
    }
}
