//! # Food Actor
//!
//! Owns the menu. Items are seeded at bootstrap; the public surface is the
//! availability-filtered listing, plus per-id reads used by the order actor
//! when snapshotting prices.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::FoodClient;
use crate::model::{FoodId, FoodItem};
use resource_actor::ResourceActor;

/// Creates a new Food actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FoodItem>, FoodClient) {
    let mut next = 0u32;
    let (actor, generic_client) = ResourceActor::new(buffer_size, move || {
        next += 1;
        FoodId(next)
    });
    (actor, FoodClient::new(generic_client))
}
