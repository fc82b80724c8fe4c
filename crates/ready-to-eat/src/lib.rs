//! # Ready-to-Eat Backend
//!
//! A food-ordering backend built on the [`resource_actor`] framework: user,
//! admin, and guest authentication over server-side sessions, a food catalog,
//! and an order lifecycle (creation, time-driven status progression, points).
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`model::User`], [`model::Admin`],
//!   [`model::FoodItem`], [`model::Order`], [`model::Session`]) plus the
//!   order lifecycle rules and the [`model::Identity`] tag.
//! - **Actors** ([`user_actor`], [`admin_actor`], [`food_actor`],
//!   [`order_actor`], [`session_actor`]): one store-owning task per resource.
//! - **[clients]**: Type-safe wrappers (e.g. [`clients::OrderClient`]) that
//!   hide the message passing.
//! - **[api]**: The request/response operations surface — registration,
//!   login, catalog, orders, points — with session resolution and the
//!   client-facing error taxonomy.
//! - **[lifecycle]**: Orchestration layer that wires and runs the actors.
//!
//! ## Order Status Progression
//!
//! Orders move `current → ready → completed`, driven purely by elapsed
//! wall-clock time relative to stored timestamps. There is no background
//! timer: the order actor applies the transition rules when a reconciliation
//! request arrives (every status-bearing read issues one). Because the actor
//! owns the store and processes one message at a time, concurrent
//! reconciliation requests serialize and the set-once timestamp guards make
//! repeat passes no-ops.

pub mod admin_actor;
pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod food_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod seed;
pub mod session_actor;
pub mod user_actor;
