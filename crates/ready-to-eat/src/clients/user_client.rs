//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserActionResult, UserError, UserStoreAction, UserStoreResult};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(err) => *err,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    /// Registers a new user. The payload carries a password hash, never a
    /// plaintext password, so it stays out of the instrument fields too.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!(email = %params.email, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Resolves an email to its user, if registered.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_store_action(UserStoreAction::FindByEmail(email.to_string()))
            .await
            .map_err(Self::map_error)?;
        let UserStoreResult::Found(user) = result;
        Ok(user)
    }

    /// Overwrites the points balance; the actor rejects negative values.
    /// Returns the stored balance.
    #[instrument(skip(self))]
    pub async fn set_points(&self, id: UserId, points: i64) -> Result<i64, UserError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, UserAction::SetPoints(points))
            .await
            .map_err(Self::map_error)?;
        let UserActionResult::Points(balance) = result;
        Ok(balance)
    }

    /// Swaps in a new password hash.
    #[instrument(skip(self, password_hash))]
    pub async fn change_password(
        &self,
        id: UserId,
        password_hash: String,
    ) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                UserUpdate {
                    password_hash: Some(password_hash),
                },
            )
            .await
            .map_err(Self::map_error)
    }
}
