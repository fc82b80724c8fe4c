//! Error types for the Admin actor.

use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The requested admin was not found.
    #[error("Admin not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AdminError {
    fn from(msg: String) -> Self {
        AdminError::ActorCommunicationError(msg)
    }
}
