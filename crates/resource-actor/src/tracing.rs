//! # Observability & Tracing
//!
//! Tracing infrastructure for the whole actor system.
//!
//! The framework uses the `tracing` crate with hierarchical spans to trace:
//! - Actor lifecycle events (startup, shutdown)
//! - Entity operations (Create, Get, Update, Delete, Actions, Store actions)
//! - Request flows with complete context
//! - Errors with detailed entity IDs
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). This keeps log lines short while still providing
//! rich structured data; the `entity_type` field carries the resource name.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `RUST_LOG=debug`, client methods log full payloads once at function
//! entry (`debug!(?params, "...")` — the `?` sigil records the value's `Debug`
//! representation as a structured field); all subsequent lines stay concise.

/// Initializes the global tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "order_placement:place_order")
        .init();
}
