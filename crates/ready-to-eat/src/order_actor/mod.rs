//! # Order Actor
//!
//! Owns the order store and runs the status lifecycle.
//!
//! ## Overview
//!
//! This is the one actor with real coordination in it. Creation validates the
//! owning user and snapshots menu prices through its context clients
//! (`on_create`, so a failed validation inserts nothing), the reconcile store
//! action sweeps every non-terminal order against the clock, and the
//! force-status action is the admin override.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] (force status) and [`OrderStoreAction`]
//!   (reconcile, per-user listing)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Why reconciliation is a store action
//!
//! The status rules depend only on stored timestamps and `now`, but they must
//! visit *every* non-terminal order and must not interleave with other writes
//! mid-sweep. Running the sweep inside the actor makes it one atomic step:
//! two clients reconciling at the same moment simply queue, and the set-once
//! timestamp guards make the second pass a no-op.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client. The actor's context —
/// `(UserClient, FoodClient)` — is injected later via `run()`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let mut next = 0u32;
    let (actor, generic_client) = ResourceActor::new(buffer_size, move || {
        next += 1;
        OrderId(next)
    });
    (actor, OrderClient::new(generic_client))
}
