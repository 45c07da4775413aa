//! Custom actions for the Menu actor.

/// Catalog curation shortcuts beyond plain field updates.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Sets the featured flag, returning whether it changed.
    SetFeatured(bool),
}

/// Results from [`MenuAction`]s.
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    SetFeatured(bool),
}
