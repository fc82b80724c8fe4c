//! Error types for the Food actor.

use thiserror::Error;

/// Errors that can occur during food catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// The requested food item was not found.
    #[error("Food item not found: {0}")]
    NotFound(String),

    /// A seed payload carried a non-positive price.
    #[error("Food price must be positive (got {0})")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FoodError {
    fn from(msg: String) -> Self {
        FoodError::ActorCommunicationError(msg)
    }
}
