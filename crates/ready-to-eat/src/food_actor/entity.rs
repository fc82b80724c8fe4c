//! Entity trait implementation for [`FoodItem`].

use crate::food_actor::{FoodError, FoodStoreAction, FoodStoreResult};
use crate::model::{FoodCreate, FoodId, FoodItem};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for FoodItem {
    type Id = FoodId;
    type Create = FoodCreate;
    type Update = (); // Availability is toggled outside this system
    type Action = ();
    type ActionResult = ();
    type StoreAction = FoodStoreAction;
    type StoreActionResult = FoodStoreResult;
    type Context = ();
    type Error = FoodError;

    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, Self::Error> {
        if params.price <= 0.0 {
            return Err(FoodError::InvalidPrice(params.price));
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            image_path: params.image_path,
            has_extra_option: params.has_extra_option,
            is_available: params.is_available,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_store_action(
        store: &mut HashMap<FoodId, Self>,
        action: FoodStoreAction,
        _ctx: &(),
    ) -> Result<FoodStoreResult, Self::Error> {
        match action {
            FoodStoreAction::ListAvailable => {
                let mut items: Vec<FoodItem> =
                    store.values().filter(|f| f.is_available).cloned().collect();
                items.sort_by_key(|f| f.id.0);
                Ok(FoodStoreResult::Items(items))
            }
        }
    }
}
