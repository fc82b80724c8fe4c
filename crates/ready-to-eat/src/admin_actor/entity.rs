//! Entity trait implementation for [`Admin`].

use crate::admin_actor::{AdminError, AdminStoreAction, AdminStoreResult};
use crate::model::{Admin, AdminCreate, AdminId};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for Admin {
    type Id = AdminId;
    type Create = AdminCreate;
    type Update = (); // Admin records are static after seeding
    type Action = ();
    type ActionResult = ();
    type StoreAction = AdminStoreAction;
    type StoreActionResult = AdminStoreResult;
    type Context = ();
    type Error = AdminError;

    fn from_create_params(id: AdminId, params: AdminCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            username: params.username,
            password_hash: params.password_hash,
            full_name: params.full_name,
            role: params.role,
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
        store: &mut HashMap<AdminId, Self>,
        action: AdminStoreAction,
        _ctx: &(),
    ) -> Result<AdminStoreResult, Self::Error> {
        match action {
            AdminStoreAction::FindByUsername(username) => Ok(AdminStoreResult::Found(
                store.values().find(|a| a.username == username).cloned(),
            )),
        }
    }
}
