//! # Entity Contract
//!
//! This module defines the generic building block every catalog record follows.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all catalog record types must implement.

use std::fmt::Debug;

// =============================================================================
// 1. THE ABSTRACTION (Create, Update, and Actions)
// =============================================================================

/// Trait that any catalog record must implement.
///
/// # Architecture Note
/// The record's lifecycle is split into three typed entry points:
///
/// - **Create**: [`Entity::from_create_params`] builds a fully validated record from a DTO.
/// - **Update**: [`Entity::on_update`] applies a partial DTO where every `Some` field is validated.
/// - **Action**: [`Entity::handle_action`] runs a record-specific operation (e.g. basket toggles).
///
/// We use "Associated Types" (type Create, type Update, etc.) to enforce type safety.
/// A `Gpu` record requires a `GpuCreate` payload, and you can't accidentally hand it
/// some other record's payload.
///
/// # Failure Semantics
/// A returned `Err` must leave the record exactly as it was before the call.
pub trait Entity: Sized + Debug {
    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Debug;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// Enum representing record-specific operations (e.g., `AddToBasket`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The error produced when a payload violates a record invariant.
    type Error: std::error::Error;

    /// Construct the full record from the creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. EXAMPLE USAGE (Test)
// =============================================================================
