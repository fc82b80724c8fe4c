//! # Admin Client
//!
//! Provides a high-level API for interacting with the `Admin` actor.

use crate::admin_actor::{AdminError, AdminStoreAction, AdminStoreResult};
use crate::model::{Admin, AdminCreate, AdminId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Admin actor.
#[derive(Clone)]
pub struct AdminClient {
    inner: ResourceClient<Admin>,
}

impl AdminClient {
    pub fn new(inner: ResourceClient<Admin>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Admin> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &ResourceClient<Admin> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<AdminError>() {
                Ok(err) => *err,
                Err(other) => AdminError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => AdminError::NotFound(id),
            other => AdminError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl AdminClient {
    /// Creates an admin record (seed path only).
    #[instrument(skip(self, params))]
    pub async fn create_admin(&self, params: AdminCreate) -> Result<AdminId, AdminError> {
        debug!(username = %params.username, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Resolves a username to its admin, if any.
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, AdminError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_store_action(AdminStoreAction::FindByUsername(username.to_string()))
            .await
            .map_err(Self::map_error)?;
        let AdminStoreResult::Found(admin) = result;
        Ok(admin)
    }
}
