//! # Resource Actor Framework
//!
//! This crate provides the foundational building blocks for creating type-safe,
//! concurrent actor systems in Rust. It implements a **Resource-Oriented
//! Architecture (ROA)** pattern on top of the **Actor Model**, providing a
//! clean abstraction for managing stateful entities.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Separation**: Each resource type (User, FoodItem, Order, Session) gets
//!   its own actor with completely isolated state.
//! - **Coordination**: When resources need to interact (e.g., an Order
//!   snapshotting FoodItem prices at creation), they communicate via injected
//!   clients instead of direct coupling.
//! - **Sequential processing** within each actor eliminates race conditions:
//!   no `Mutex`, no `RwLock`, no shared mutable state. A bulk scan-and-rewrite
//!   over a store (see store actions below) is one atomic step.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`]) - Type-safe communication
//!
//! You write your business logic **once** in the entity trait, and the
//! framework handles all the async message passing, error handling, and state
//! management.
//!
//! ## Operations
//!
//! Every actor answers the standard CRUD set (Create / Get / Update / Delete)
//! plus two extension points:
//!
//! - **Actions** address a single entity by id (`perform_action`).
//! - **Store actions** address the whole store (`perform_store_action`):
//!   secondary-key lookups, filtered listings, and bulk state transitions that
//!   must be atomic with respect to every other request.
//!
//! ## ID Factories
//!
//! Each actor is constructed with a factory closure that mints IDs. This keeps
//! the ID scheme a per-resource decision: sequential numeric newtypes for
//! durable records, random hex tokens for sessions.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: u32,
//!     value: i64,
//! }
//!
//! #[derive(Debug)] struct CounterCreate { start: i64 }
//! #[derive(Debug)] struct CounterUpdate { value: i64 }
//! #[derive(Debug)] enum CounterAction { Add(i64) }
//! #[derive(Debug)] enum CounterStoreAction { Total }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type StoreAction = CounterStoreAction;
//!     type StoreActionResult = i64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.value = update.value;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Add(n) => {
//!                 self.value += n;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//!
//!     async fn handle_store_action(
//!         store: &mut HashMap<u32, Self>,
//!         action: CounterStoreAction,
//!         _ctx: &(),
//!     ) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterStoreAction::Total => Ok(store.values().map(|c| c.value).sum()),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // Sequential ids, minted inside the actor task.
//!     let mut next = 0u32;
//!     let (actor, client) = ResourceActor::<Counter>::new(10, move || {
//!         next += 1;
//!         next
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 5 }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Add(3)).await.unwrap();
//!     assert_eq!(value, 8);
//!
//!     let total = client
//!         .perform_store_action(CounterStoreAction::Total)
//!         .await
//!         .unwrap();
//!     assert_eq!(total, 8);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at
//! construction time. This "late binding" pattern solves circular
//! dependencies:
//!
//! ```rust,ignore
//! // 1. Create all actors (no dependencies yet)
//! let (user_actor, user_client) = ResourceActor::<User>::new(32, user_ids);
//! let (food_actor, food_client) = ResourceActor::<FoodItem>::new(32, food_ids);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32, order_ids);
//!
//! // 2. Wire dependencies when starting actors
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(food_actor.run(()));
//! // Order actor validates users and snapshots food prices via its context
//! tokio::spawn(order_actor.run((user_client, food_client)));
//! ```
//!
//! ## Testing
//!
//! The framework provides a **MockClient** type that implements the same
//! `ResourceClient<T>` API as the real client but operates entirely in-memory,
//! plus channel-level helpers for asserting on raw requests. See the [`mock`]
//! module for the full API and usage patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
