//! # API Surface
//!
//! The request/response operations the outside world sees: registration and
//! login, guest access, the catalog, orders, and points. Each operation
//! resolves the caller's session token to an [`Identity`] first and then
//! matches on it exhaustively — behavior differences between users, admins,
//! and guests are all visible in the match arms, with no fall-through.
//!
//! The [`Api`] value is plain data (cloned clients), so handlers receive it
//! explicitly; there is no ambient request state. Transport concerns
//! (routing, cookies, CORS) live outside this crate — operations take DTOs
//! and return `Result<_, `[`ApiError`]`>`, and `ApiError::status_code()` is
//! the bridge to HTTP.

pub mod auth;
pub mod error;
pub mod orders;
pub mod points;

pub use auth::{
    AdminLoginRequest, AdminSession, AuthSession, ChangePasswordRequest, GuestSession,
    LoginRequest, ProfileResponse, RegisterRequest,
};
pub use error::ApiError;
pub use orders::CreateOrderRequest;

use crate::clients::{AdminClient, FoodClient, OrderClient, SessionClient, UserClient};
use crate::lifecycle::AppSystem;
use crate::model::{FoodItem, Identity, SessionToken, UserId};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

/// The operations surface. Cheap to clone; every handler gets its own copy.
#[derive(Clone)]
pub struct Api {
    pub(crate) users: UserClient,
    pub(crate) admins: AdminClient,
    pub(crate) foods: FoodClient,
    pub(crate) orders: OrderClient,
    pub(crate) sessions: SessionClient,
    /// The seeded account guest orders are attributed to.
    pub(crate) fallback_user: UserId,
}

/// Liveness answer for load balancers and smoke tests.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Api {
    /// Builds the surface over a running system.
    pub fn new(system: &AppSystem, fallback_user: UserId) -> Self {
        Self {
            users: system.users.clone(),
            admins: system.admins.clone(),
            foods: system.foods.clone(),
            orders: system.orders.clone(),
            sessions: system.sessions.clone(),
            fallback_user,
        }
    }

    /// Resolves the caller's token; anything short of a live identity is an
    /// authentication failure.
    pub(crate) async fn identity(&self, token: &SessionToken) -> Result<Identity, ApiError> {
        self.sessions
            .resolve(token, Utc::now())
            .await?
            .ok_or(ApiError::Unauthenticated)
    }

    /// The public menu: available items only, no parameters.
    #[instrument(skip(self))]
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        Ok(self.foods.list_available().await?)
    }

    /// Static liveness answer.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            message: "Ready-to-Eat API is running",
        }
    }
}
