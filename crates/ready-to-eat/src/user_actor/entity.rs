//! Entity trait implementation for [`User`].

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserActionResult, UserError, UserStoreAction, UserStoreResult};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type StoreAction = UserStoreAction;
    type StoreActionResult = UserStoreResult;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            password_hash: params.password_hash,
            mobile: params.mobile,
            points: 0,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(password_hash) = update.password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &(),
    ) -> Result<UserActionResult, Self::Error> {
        match action {
            UserAction::SetPoints(points) => {
                if points < 0 {
                    return Err(UserError::NegativePoints(points));
                }
                self.points = points;
                self.updated_at = Utc::now();
                Ok(UserActionResult::Points(self.points))
            }
        }
    }

    async fn handle_store_action(
        store: &mut HashMap<UserId, Self>,
        action: UserStoreAction,
        _ctx: &(),
    ) -> Result<UserStoreResult, Self::Error> {
        match action {
            UserStoreAction::FindByEmail(email) => Ok(UserStoreResult::Found(
                store.values().find(|u| u.email == email).cloned(),
            )),
        }
    }
}
