//! Points operations: read and overwrite the caller's balance.
//!
//! The balance is *set*, not incremented — the caller passes the accumulated
//! value and is trusted to have computed it. The only invariant the store
//! defends is that the balance never goes negative.

use crate::api::{Api, ApiError};
use crate::model::{Identity, SessionToken};
use resource_actor::ActorClient;
use tracing::instrument;

impl Api {
    /// The caller's current balance. Only registered users have one.
    #[instrument(skip(self))]
    pub async fn get_points(&self, token: &SessionToken) -> Result<i64, ApiError> {
        match self.identity(token).await? {
            Identity::User(id) => {
                let user = self
                    .users
                    .get(id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound("User".to_string()))?;
                Ok(user.points)
            }
            Identity::Admin(_) | Identity::Guest(_) => Err(ApiError::Forbidden),
        }
    }

    /// Overwrites the caller's balance. Negative values are rejected before
    /// anything is stored and the old balance stands.
    #[instrument(skip(self))]
    pub async fn set_points(&self, token: &SessionToken, points: i64) -> Result<i64, ApiError> {
        if points < 0 {
            return Err(ApiError::Validation(
                "Points balance cannot be negative".to_string(),
            ));
        }
        match self.identity(token).await? {
            Identity::User(id) => Ok(self.users.set_points(id, points).await?),
            Identity::Admin(_) | Identity::Guest(_) => Err(ApiError::Forbidden),
        }
    }
}
