//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// This enum implements a **Resource-Oriented** design pattern where each actor
/// manages a specific type of resource (the [`ActorEntity`]). Instead of
/// defining ad-hoc messages for every operation, we standardize around a set of
/// lifecycle operations that apply to almost any persistent resource.
///
/// # The CRUD Pattern, Plus Actions
/// The variants map directly to standard **CRUD** operations, plus two custom
/// variants for logic that doesn't fit the CRUD model:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get (Read)**: Retrieval. Fetches the current state of the resource by ID.
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Lifecycle end. Removes the resource.
/// - **Action**: Extensibility. Executes a custom [`ActorEntity::Action`] on one entity.
/// - **Store**: Extensibility. Executes a custom [`ActorEntity::StoreAction`]
///   against the whole store (scans, lookups by secondary key, bulk state
///   transitions).
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity` and uses the trait's associated
/// types, which guarantees that you can't send a "User Create" payload to a
/// "FoodItem" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Store {
        action: T::StoreAction,
        respond_to: Response<T::StoreActionResult>,
    },
}
