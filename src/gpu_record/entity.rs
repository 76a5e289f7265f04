//! Entity trait implementation for the GPU record type.
//!
//! This module contains the [`Entity`] trait implementation
//! that lets [`Gpu`] be created, updated and acted on through typed payloads.
//!
//! See the trait implementation on [`Gpu`] for method documentation.

use super::actions::{BasketOutcome, GpuAction};
use super::error::ValidationError;
use crate::framework::Entity;
use crate::model::{Gpu, GpuCreate, GpuUpdate};
use tracing::debug;

impl Entity for Gpu {
    type Create = GpuCreate;
    type Update = GpuUpdate;
    type Action = GpuAction;
    type ActionResult = BasketOutcome;
    type Error = ValidationError;

    /// Creates a new Gpu from creation parameters, counted in the process-wide state.
    fn from_create_params(params: GpuCreate) -> Result<Self, ValidationError> {
        Gpu::new(params)
    }

    /// Handles updates to the Gpu record.
    ///
    /// Every provided field is validated against a working copy; the record is
    /// only replaced once all of them pass.
    fn on_update(&mut self, update: GpuUpdate) -> Result<(), ValidationError> {
        debug!(?update, "Update");
        let mut next = self.clone();
        if let Some(name) = update.model_name {
            next.set_model_name(name)?;
        }
        if let Some(mhz) = update.gpu_clock {
            next.set_gpu_clock(mhz)?;
        }
        if let Some(architecture) = update.architecture {
            next.set_architecture(architecture);
        }
        if let Some(gb) = update.memory_size {
            next.set_memory_size(gb)?;
        }
        if let Some(date) = update.release_date {
            next.set_release_date(date)?;
        }
        if let Some(bits) = update.memory_bus_width {
            next.set_memory_bus_width(bits)?;
        }
        if let Some(price) = update.launch_price {
            next.set_launch_price(price)?;
        }
        *self = next;
        Ok(())
    }

    /// Handles custom actions for the Gpu record.
    ///
    /// # Actions
    /// - `AddToBasket`: see [`Gpu::add_to_basket`]
    /// - `RemoveFromBasket`: see [`Gpu::remove_from_basket`]
    fn handle_action(&mut self, action: GpuAction) -> Result<BasketOutcome, ValidationError> {
        match action {
            GpuAction::AddToBasket => Ok(self.add_to_basket()),
            GpuAction::RemoveFromBasket => Ok(self.remove_from_basket()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Architecture;
    use crate::runtime::CatalogState;
    use rust_decimal::Decimal;

    fn sample() -> Gpu {
        let params = GpuCreate::new("Radeon RX 7800 XT", Architecture::Ampere, Decimal::new(499, 0));
        Gpu::new_in(&CatalogState::new(), params).unwrap()
    }

    #[test]
    fn test_update_applies_all_fields() {
        let mut gpu = sample();
        let update = GpuUpdate {
            gpu_clock: Some(2430),
            memory_size: Some(16),
            memory_bus_width: Some(256),
            architecture: Some(Architecture::Hopper),
            ..GpuUpdate::default()
        };

        gpu.on_update(update).unwrap();
        assert_eq!(gpu.gpu_clock(), 2430);
        assert_eq!(gpu.memory_size(), 16);
        assert_eq!(gpu.memory_bus_width(), 256);
        assert_eq!(gpu.architecture(), Architecture::Hopper);
        assert_eq!(gpu.model_name(), "Radeon RX 7800 XT");
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let mut gpu = sample();
        let before = gpu.clone();

        // The first two fields are valid, the last one is not
        let update = GpuUpdate {
            model_name: Some("Radeon RX 7900 GRE".into()),
            gpu_clock: Some(2000),
            launch_price: Some(Decimal::ZERO),
            ..GpuUpdate::default()
        };

        assert_eq!(
            gpu.on_update(update),
            Err(ValidationError::NonPositivePrice(Decimal::ZERO))
        );
        assert_eq!(gpu, before);
    }

    #[test]
    fn test_update_from_json() {
        let update: GpuUpdate =
            serde_json::from_str(r#"{"memory_size": 12, "launch_price": "329.99"}"#).unwrap();
        assert_eq!(update.memory_size, Some(12));
        assert_eq!(update.launch_price, Some(Decimal::new(32999, 2)));
        assert!(update.model_name.is_none());

        let mut gpu = sample();
        gpu.on_update(update).unwrap();
        assert_eq!(gpu.launch_price(), Decimal::new(32999, 2));
    }

    #[test]
    fn test_handle_action_toggles_basket() {
        let mut gpu = sample();
        assert_eq!(
            gpu.handle_action(GpuAction::RemoveFromBasket).unwrap(),
            BasketOutcome::Removed
        );
        assert_eq!(
            gpu.handle_action(GpuAction::RemoveFromBasket).unwrap(),
            BasketOutcome::NotInBasket
        );
        assert_eq!(
            gpu.handle_action(GpuAction::AddToBasket).unwrap(),
            BasketOutcome::Added
        );
        assert!(gpu.in_basket());
    }

    #[test]
    fn test_from_create_params_counts_globally() {
        let before = Gpu::instance_count();
        let gpu = Gpu::from_create_params(GpuCreate::default()).unwrap();
        assert_eq!(gpu.model_name(), "DefaultName");
        // Other tests may construct records concurrently
        assert!(Gpu::instance_count() > before);
    }
}
