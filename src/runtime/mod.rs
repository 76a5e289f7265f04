//! Runtime state and environment setup.
//!
//! This module contains what lives outside any single record:
//!
//! - **Shared catalog state**: the instance counter and discount rate
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`CatalogState`] - Process-wide (or injected) counter and discount rate
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod catalog;
pub mod tracing;

pub use catalog::*;
pub use self::tracing::*;
