//! # User Actor
//!
//! Owns the registered-user store: account records, credentials, and the
//! points balance.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`actions`] - [`UserAction`] (points) and [`UserStoreAction`] (email lookup)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Key Features
//!
//! - **No dependencies**: the user actor has no context (Context = `()`)
//! - **Sequential ids**: `user_1`, `user_2`, … from the injected factory
//! - **Email lookup as a store action**: login and the duplicate-email check
//!   resolve emails inside the actor task, one atomic scan per request

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::{User, UserId};
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let mut next = 0u32;
    let (actor, generic_client) = ResourceActor::new(buffer_size, move || {
        next += 1;
        UserId(next)
    });
    (actor, UserClient::new(generic_client))
}
