//! # GPU Catalog
//!
//! > **A validated GPU product record for an e-commerce catalog.**
//!
//! This crate models a single catalog entry, a graphics card, with strictly validated
//! fields, a basket flag, a shared discount-aware pricing helper, and a compact
//! semicolon-delimited text form.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Invalid states are rejected at the door
//!
//! Every field goes through the same validation on construction and on every later
//! assignment. A rejected value returns a [`ValidationError`](gpu_record::ValidationError)
//! and leaves the record untouched, so a [`Gpu`](model::Gpu) you hold is always valid.
//!
//! ### One designated initializer
//!
//! Instead of several constructors, [`Gpu::new`](model::Gpu::new) takes a
//! [`GpuCreate`](model::GpuCreate) whose fields are all optional. Missing fields take
//! their documented defaults:
//!
//! - `GpuCreate::default()` builds the all-defaults record;
//! - `GpuCreate::new(name, architecture, price)` builds the short form;
//! - chaining `.gpu_clock(..)`, `.memory_size(..)`, `.release_date(..)`, `.memory_bus_width(..)` builds the full form.
//!
//! ### Shared state, injectable
//!
//! The instance counter and the discount rate are shared by all records. They live in a
//! [`CatalogState`](runtime::CatalogState): one lazily initialized process-wide instance,
//! or your own via [`Gpu::new_in`](model::Gpu::new_in) for isolated tests.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Contract ([`framework`])
//! - **Role**: The [`Entity`](framework::Entity) trait: create, update and act on a record through typed payloads.
//!
//! ### 2. The Data ([`model`])
//! - **Role**: [`Gpu`](model::Gpu), its DTOs, defaults and the [`Architecture`](model::Architecture) enum.
//!
//! ### 3. The Behavior ([`gpu_record`])
//! - **Role**: Errors, basket actions, text parsing/formatting and the info report.
//!
//! ### 4. The Environment ([`runtime`])
//! - **Role**: Shared [`CatalogState`](runtime::CatalogState) and [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use gpu_catalog::model::{Architecture, Gpu, GpuCreate};
//! use rust_decimal::Decimal;
//!
//! let params = GpuCreate::new("Gigabyte GeForce RTX 5060 Ti", Architecture::Blackwell, Decimal::new(470, 0));
//! let gpu = Gpu::new(params)?;
//! assert_eq!(gpu.to_string(), "Gigabyte GeForce RTX 5060 Ti;Blackwell;470");
//!
//! let back: Gpu = gpu.to_string().parse()?;
//! assert_eq!(back.architecture(), Architecture::Blackwell);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod framework;
pub mod gpu_record;
pub mod model;
pub mod runtime;
