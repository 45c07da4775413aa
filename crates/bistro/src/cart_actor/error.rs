//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart line was not found.
    #[error("Cart line not found: {0}")]
    NotFound(String),

    /// The referenced menu item does not exist in the catalog.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    /// Quantity must be a positive whole number.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
