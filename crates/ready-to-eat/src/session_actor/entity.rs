//! Entity trait implementation for [`Session`].

use crate::model::{Session, SessionCreate, SessionToken};
use crate::session_actor::SessionError;
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for Session {
    type Id = SessionToken;
    type Create = SessionCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type StoreAction = ();
    type StoreActionResult = ();
    type Context = ();
    type Error = SessionError;

    fn from_create_params(token: SessionToken, params: SessionCreate) -> Result<Self, Self::Error> {
        let expires_at = params.expires_at();
        Ok(Self {
            token,
            identity: params.identity,
            durability: params.durability,
            created_at: params.now,
            expires_at,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_store_action(
        _store: &mut HashMap<SessionToken, Self>,
        _action: (),
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
