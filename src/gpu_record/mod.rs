//! # GPU Record
//!
//! Behavior of the [`Gpu`](crate::model::Gpu) catalog record beyond plain field access.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Gpu`](crate::model::Gpu)
//! - [`error`] - [`ValidationError`] and [`FormatError`]
//! - [`actions`] - [`GpuAction`] and [`BasketOutcome`] for basket toggles
//! - [`text`] - `Display`, [`Gpu::parse`](crate::model::Gpu::parse) and [`Gpu::try_parse`](crate::model::Gpu::try_parse)
//! - [`report`] - the multi-line info block
//!
//! ## Usage
//!
//! ```rust
//! use gpu_catalog::framework::Entity;
//! use gpu_catalog::gpu_record::{BasketOutcome, GpuAction};
//! use gpu_catalog::model::Gpu;
//!
//! let mut gpu = Gpu::parse("Gigabyte GeForce RTX 5060 Ti;Blackwell;470").unwrap();
//! assert_eq!(gpu.to_string(), "Gigabyte GeForce RTX 5060 Ti;Blackwell;470");
//!
//! let outcome = gpu.handle_action(GpuAction::RemoveFromBasket).unwrap();
//! assert_eq!(outcome, BasketOutcome::Removed);
//! println!("{}", outcome);
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod report;
pub mod text;

pub use actions::*;
pub use error::*;
