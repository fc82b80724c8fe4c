//! Client-facing error taxonomy.
//!
//! Every operation fails into one of these buckets, each carrying an
//! HTTP-style status code for the transport layer to map directly.
//! Unexpected failures are logged with their internal detail and surface as
//! a fixed generic message — internal text never reaches a caller, on the
//! login path included.

use crate::admin_actor::AdminError;
use crate::food_actor::FoodError;
use crate::order_actor::OrderError;
use crate::session_actor::SessionError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors returned by the API surface.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Malformed input, rejected before any store mutation. 400.
    #[error("{0}")]
    Validation(String),

    /// No valid identity in the session. 401.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Login with a bad email/username or password. 401.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Valid identity, wrong kind for the operation. 403.
    #[error("Insufficient privileges")]
    Forbidden,

    /// The referenced entity does not exist (or is outside the caller's
    /// scope, which must look identical). 404.
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness violation. 409.
    #[error("{0}")]
    Conflict(String),

    /// Anything unexpected. 500. The generic message is all a caller sees;
    /// detail goes to the log at construction time.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// The HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => 401,
            ApiError::Forbidden => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }

    /// Wraps an unexpected failure, logging the internal detail here so the
    /// caller-facing value never has to carry it.
    pub fn internal(context: &str, detail: impl std::fmt::Display) -> Self {
        tracing::error!(context, error = %detail, "internal error");
        ApiError::Internal(format!("{context}: {detail}"))
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound("User".to_string()),
            UserError::NegativePoints(_) => ApiError::Validation(e.to_string()),
            UserError::ActorCommunicationError(_) => ApiError::internal("user store", e),
        }
    }
}

impl From<AdminError> for ApiError {
    fn from(e: AdminError) -> Self {
        match e {
            AdminError::NotFound(_) => ApiError::NotFound("Admin".to_string()),
            AdminError::ActorCommunicationError(_) => ApiError::internal("admin store", e),
        }
    }
}

impl From<FoodError> for ApiError {
    fn from(e: FoodError) -> Self {
        match e {
            FoodError::NotFound(_) => ApiError::NotFound("Food item".to_string()),
            FoodError::InvalidPrice(_) => ApiError::Validation(e.to_string()),
            FoodError::ActorCommunicationError(_) => ApiError::internal("food store", e),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound("Order".to_string()),
            OrderError::UnknownUser(_) => ApiError::NotFound("User".to_string()),
            OrderError::UnknownFood(id) => ApiError::NotFound(format!("Food item {}", id.0)),
            OrderError::InvalidQuantity { .. } | OrderError::EmptyOrder => {
                ApiError::Validation(e.to_string())
            }
            OrderError::ActorCommunicationError(_) => ApiError::internal("order store", e),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            // A token that no longer resolves is an authentication failure,
            // not a lookup failure.
            SessionError::NotFound(_) => ApiError::Unauthenticated,
            SessionError::ActorCommunicationError(_) => ApiError::internal("session store", e),
        }
    }
}
