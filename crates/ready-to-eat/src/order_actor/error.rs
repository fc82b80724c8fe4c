//! Error types for the Order actor.

use crate::model::{FoodId, UserId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The user the order would belong to does not exist.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// A line referenced a food id that is not on the menu. Creation aborts
    /// with nothing persisted.
    #[error("Unknown food item: {0}")]
    UnknownFood(FoodId),

    /// A line carried a zero quantity.
    #[error("Line {line_no} has zero quantity")]
    InvalidQuantity { line_no: u32 },

    /// An order must carry at least one line.
    #[error("Order has no line items")]
    EmptyOrder,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
