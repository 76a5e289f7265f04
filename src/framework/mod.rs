//! Generic entity contract for catalog records.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be created, updated and acted on through typed payloads

pub mod entity;

pub use entity::*;
