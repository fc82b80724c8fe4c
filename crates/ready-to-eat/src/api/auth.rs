//! Authentication and session operations: register, the three login kinds,
//! logout, profile, and password change.

use crate::api::{Api, ApiError};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::validate::{validate_email, validate_mobile, validate_password};
use crate::model::{
    new_guest_id, AdminProfile, Durability, Identity, SessionToken, UserCreate, UserProfile,
};
use chrono::Utc;
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// A fresh user session: the token plus the account it resolves to.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: SessionToken,
    pub profile: UserProfile,
}

/// A fresh admin session.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    pub token: SessionToken,
    pub profile: AdminProfile,
}

/// A fresh ephemeral guest session.
#[derive(Debug, Clone, Serialize)]
pub struct GuestSession {
    pub token: SessionToken,
    pub guest_id: String,
}

/// The active identity's public record, one shape per kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProfileResponse {
    User(UserProfile),
    Admin(AdminProfile),
    Guest { guest_id: String },
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

impl Api {
    /// Registers a new user and opens a persistent session for them.
    ///
    /// All format rules run before any store is touched: a rejected request
    /// leaves no user row behind. A duplicate email is a 409.
    #[instrument(skip(self, req))]
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthSession, ApiError> {
        require("First name", &req.first_name)?;
        require("Last name", &req.last_name)?;
        require("Email", &req.email)?;
        require("Password", &req.password)?;
        require("Mobile", &req.mobile)?;
        validate_email(&req.email).map_err(ApiError::Validation)?;
        validate_password(&req.password).map_err(ApiError::Validation)?;
        validate_mobile(&req.mobile).map_err(ApiError::Validation)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash =
            hash_password(&req.password).map_err(|e| ApiError::internal("password hashing", e))?;
        let id = self
            .users
            .create_user(UserCreate {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
                mobile: req.mobile,
            })
            .await?;
        let user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| ApiError::internal("register", "created user missing"))?;

        let token = self
            .sessions
            .open(Identity::User(id), Durability::Persistent, Utc::now())
            .await?;
        Ok(AuthSession {
            token,
            profile: UserProfile::from(&user),
        })
    }

    /// Email + password login. Wrong email and wrong password are
    /// indistinguishable to the caller.
    #[instrument(skip(self, req))]
    pub async fn login(&self, req: LoginRequest) -> Result<AuthSession, ApiError> {
        if req.email.trim().is_empty() || req.password.is_empty() {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&user.password_hash, &req.password) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self
            .sessions
            .open(Identity::User(user.id), Durability::Persistent, Utc::now())
            .await?;
        Ok(AuthSession {
            token,
            profile: UserProfile::from(&user),
        })
    }

    /// Username + password login against the admin store.
    #[instrument(skip(self, req))]
    pub async fn admin_login(&self, req: AdminLoginRequest) -> Result<AdminSession, ApiError> {
        if req.username.trim().is_empty() || req.password.is_empty() {
            return Err(ApiError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let admin = self
            .admins
            .find_by_username(&req.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&admin.password_hash, &req.password) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self
            .sessions
            .open(Identity::Admin(admin.id), Durability::Persistent, Utc::now())
            .await?;
        Ok(AdminSession {
            token,
            profile: AdminProfile::from(&admin),
        })
    }

    /// Opens an ephemeral session with a synthetic guest identity. No input,
    /// nothing persisted outside the session record.
    #[instrument(skip(self))]
    pub async fn guest_access(&self) -> Result<GuestSession, ApiError> {
        let guest_id = new_guest_id();
        let token = self
            .sessions
            .open(
                Identity::Guest(guest_id.clone()),
                Durability::Ephemeral,
                Utc::now(),
            )
            .await?;
        Ok(GuestSession { token, guest_id })
    }

    /// Drops the session, whatever identity kind it held. Idempotent: an
    /// unknown or already-cleared token is still a successful logout.
    #[instrument(skip(self))]
    pub async fn logout(&self, token: &SessionToken) -> Result<(), ApiError> {
        self.sessions.close(token).await?;
        Ok(())
    }

    /// The active identity's public record.
    #[instrument(skip(self))]
    pub async fn profile(&self, token: &SessionToken) -> Result<ProfileResponse, ApiError> {
        match self.identity(token).await? {
            Identity::User(id) => {
                let user = self
                    .users
                    .get(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("User".to_string()))?;
                Ok(ProfileResponse::User(UserProfile::from(&user)))
            }
            Identity::Admin(id) => {
                let admin = self
                    .admins
                    .get(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("Admin".to_string()))?;
                Ok(ProfileResponse::Admin(AdminProfile::from(&admin)))
            }
            Identity::Guest(guest_id) => Ok(ProfileResponse::Guest { guest_id }),
        }
    }

    /// Re-keys the caller's password after verifying the current one.
    #[instrument(skip(self, req))]
    pub async fn change_password(
        &self,
        token: &SessionToken,
        req: ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        match self.identity(token).await? {
            Identity::User(id) => {
                let user = self
                    .users
                    .get(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("User".to_string()))?;
                if !verify_password(&user.password_hash, &req.current_password) {
                    return Err(ApiError::InvalidCredentials);
                }
                validate_password(&req.new_password).map_err(ApiError::Validation)?;
                let password_hash = hash_password(&req.new_password)
                    .map_err(|e| ApiError::internal("password hashing", e))?;
                self.users.change_password(id, password_hash).await?;
                Ok(())
            }
            Identity::Admin(_) | Identity::Guest(_) => Err(ApiError::Forbidden),
        }
    }
}
