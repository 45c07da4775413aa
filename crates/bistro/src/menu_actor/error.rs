//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The price is negative or otherwise unusable.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// The menu item data provided is invalid.
    #[error("Menu validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
