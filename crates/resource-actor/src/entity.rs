//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (User,
//! FoodItem, Order, Session, …) must implement to be managed by the generic
//! `ResourceActor`. It specifies associated types for IDs, DTOs, actions,
//! context, and errors, and provides lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`, `handle_action`, `handle_store_action`).
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`ActorEntity`) that all our resource types must
//! satisfy, we can write the `ResourceActor` logic *once* and reuse it
//! everywhere. This is "Polymorphism" in action.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type
//! safety. A `User` entity requires a `UserCreate` payload, and you can't
//! accidentally send it a `FoodCreate` payload. The compiler prevents this
//! class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default
//! implementations) for lifecycle hooks:
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these methods unless you want to
//! customize behavior. The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks
/// (e.g., calling other actors). It also defines a `Context` type, which is
/// injected into every hook. This allows "Late Binding" of dependencies
/// (passing clients to `run()` instead of `new()`).
///
/// # Entity Actions vs Store Actions
/// Two kinds of custom operations exist:
/// - [`ActorEntity::Action`] targets a **single entity** by id (e.g., force an
///   order's status, set a user's points balance).
/// - [`ActorEntity::StoreAction`] targets the **whole store** (e.g., reconcile
///   every non-terminal order, find a user by email, list available items).
///   Store actions run inside the actor task, so a scan-and-mutate pass over
///   all entities is a single atomic step from the callers' point of view.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a numeric newtype or a
    /// token String). IDs are produced by the factory injected into
    /// [`crate::ResourceActor::new`], so no numeric conversion bound is
    /// required here.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing operations on a single entity (e.g., `SetPoints`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Enum representing operations on the whole store (e.g., `Reconcile`,
    /// `FindByEmail`). Use an empty enum if the resource has none.
    type StoreAction: Send + Sync + Debug;

    /// The result type returned by store actions.
    type StoreActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// The framework enforces a **Per-Actor Error Type** (one enum for the
    /// whole actor) rather than per-message error types. One `UserError` must
    /// be the union of all possible user failures; the loss of per-action
    /// precision is worth the reduction in boilerplate.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking
    /// other actors). If it fails, nothing is inserted into the store.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handlers (Async) ---

    /// Handle a custom action addressed to a single entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Handle a custom action addressed to the whole store.
    ///
    /// The store is passed mutably: a store action may scan, read, or rewrite
    /// any number of entities in one sequential step.
    async fn handle_store_action(
        store: &mut HashMap<Self::Id, Self>,
        action: Self::StoreAction,
        _ctx: &Self::Context,
    ) -> Result<Self::StoreActionResult, Self::Error>;
}
