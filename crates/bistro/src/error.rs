//! # Boundary Error Taxonomy
//!
//! The four ways a routed request can fail, with their status codes. Actor
//! errors are translated into these at the router; nothing below the router
//! knows about status codes, and nothing above it sees an actor error enum.

use thiserror::Error;

/// A request-level failure, as seen by the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request body or params were malformed or referenced something
    /// unusable (bad quantity, unknown status literal, non-crew assignee).
    #[error("Invalid value for '{field}'")]
    Validation { field: String },

    /// The caller's role does not allow this operation, or the resource is
    /// not theirs. The message is deliberately uniform: it must not reveal
    /// whether the resource exists under someone else's ownership.
    #[error("Permission denied")]
    PermissionDenied,

    /// The resource does not exist.
    #[error("Not found")]
    NotFound,

    /// Something inside the actor system failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-ish status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation { .. } => 400,
            ApiError::PermissionDenied => 403,
            ApiError::NotFound => 404,
            ApiError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(ApiError::Validation { field: "quantity".into() }.status(), 400);
        assert_eq!(ApiError::PermissionDenied.status(), 403);
        assert_eq!(ApiError::NotFound.status(), 404);
        assert_eq!(ApiError::Internal("boom".into()).status(), 500);
    }

    #[test]
    fn permission_message_does_not_leak_resource_state() {
        assert_eq!(ApiError::PermissionDenied.to_string(), "Permission denied");
    }
}
