//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary and test
//! harness built on the framework.
//!
//! ## Configuration
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! The subscriber uses a compact format and hides the crate/module prefix
//! (`with_target(false)`) because actors already log an `entity_type` field.
//!
//! Log levels are controlled through the standard `RUST_LOG` environment
//! variable:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full request payloads
//! ```
//!
//! ## What Gets Traced
//!
//! - Actor lifecycle: startup, shutdown, final store size
//! - Entity operations: Create, Get, List, Update, Delete, Drain, Actions
//! - Request flow: hierarchical spans from `#[instrument]` on client methods
//! - Errors: entity ids and failure reasons as structured fields

/// Initializes the global tracing subscriber.
///
/// Call once at process start; calling twice panics (the subscriber can only
/// be installed once per process).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; actors log entity_type instead
        .compact()
        .init();
}
