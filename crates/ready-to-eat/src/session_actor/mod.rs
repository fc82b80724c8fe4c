//! # Session Actor
//!
//! Owns the server-side session store: token → identity, with a durability
//! class per record. Persistent sessions (user/admin logins) expire after
//! fifteen days; ephemeral guest sessions live until logout or until the
//! client forgets the token.
//!
//! The id factory mints random 32-hex tokens, so the framework's Create is
//! exactly "open a session" and Delete is exactly "log out". Pluggable
//! storage falls out of the client seam: handlers talk to a
//! [`SessionClient`], and tests can swap in the framework's mock.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SessionClient;
use crate::model::{new_session_token, Session};
use resource_actor::ResourceActor;

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Session>, SessionClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, new_session_token);
    (actor, SessionClient::new(generic_client))
}
