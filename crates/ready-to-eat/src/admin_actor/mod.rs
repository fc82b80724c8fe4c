//! # Admin Actor
//!
//! Owns the back-office operator store. Admins are created at bootstrap and
//! never change afterwards, so the surface is a username lookup for login
//! plus the standard reads.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AdminClient;
use crate::model::{Admin, AdminId};
use resource_actor::ResourceActor;

/// Creates a new Admin actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Admin>, AdminClient) {
    let mut next = 0u32;
    let (actor, generic_client) = ResourceActor::new(buffer_size, move || {
        next += 1;
        AdminId(next)
    });
    (actor, AdminClient::new(generic_client))
}
