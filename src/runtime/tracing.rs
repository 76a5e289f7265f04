//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the crate and its demo binary.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! The library itself only emits events; installing a subscriber is left to the binary.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix (`with_target(false)`).
//!
//! - **Structured logging** with `tracing` crate
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Construction**: which creation form was used and the running instance count (`debug`)
//! - **Shared state**: first initialization and discount changes (`debug`)
//! - **Basket**: transitions in and out of the basket (`info`)
//! - **Parsing**: inputs rejected by `try_parse` together with the reason (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Basket transitions and parse failures
//! RUST_LOG=info cargo run
//!
//! # Also show constructions and discount changes
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG Initializing shared catalog state discount=0.15
//! DEBUG GPU record constructed form="defaults" model=DefaultName total=1
//! INFO Removed from basket model=DefaultName
//! WARN Failed to parse GPU record input="RTX;Kepler;1" error=Архітектура не коректна.
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
