//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; **wiring them together** is where the
//! complexity lives. This module is the conductor:
//!
//! 1. **Actor Creation** - instantiate all actors and their clients
//! 2. **Dependency Injection** - wire actors together via context injection
//! 3. **Lifecycle Management** - start actors, then coordinate shutdown
//!
//! Dependencies bind late: actors are created bare, and clients are injected
//! through `run(context)`. That is what lets the order actor depend on the
//! user and food clients without any circular construction order.

pub mod app_system;

pub use app_system::*;
