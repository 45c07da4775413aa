//! Custom actions for the User actor.

/// Group membership operations, used by manager flows to grant and revoke the
/// Manager and Delivery roles.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds the user to a named group. Idempotent.
    JoinGroup(String),
    /// Removes the user from a named group. Idempotent.
    LeaveGroup(String),
}

/// Results from [`UserAction`]s; the `bool` reports whether membership
/// actually changed.
#[derive(Debug, Clone)]
pub enum UserActionResult {
    JoinGroup(bool),
    LeaveGroup(bool),
}
