//! # Food Client
//!
//! Provides a high-level API for interacting with the `Food` actor.

use crate::food_actor::{FoodError, FoodStoreAction, FoodStoreResult};
use crate::model::{FoodCreate, FoodId, FoodItem};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Food actor.
#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<FoodItem>,
}

impl FoodClient {
    pub fn new(inner: ResourceClient<FoodItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<FoodItem> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<FoodItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<FoodError>() {
                Ok(err) => *err,
                Err(other) => FoodError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => FoodError::NotFound(id),
            other => FoodError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl FoodClient {
    /// Adds a menu item (seed path only).
    #[instrument(skip(self, params))]
    pub async fn create_food(&self, params: FoodCreate) -> Result<FoodId, FoodError> {
        debug!(name = %params.name, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The public menu: available items in id order.
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> Result<Vec<FoodItem>, FoodError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_store_action(FoodStoreAction::ListAvailable)
            .await
            .map_err(Self::map_error)?;
        let FoodStoreResult::Items(items) = result;
        Ok(items)
    }
}
