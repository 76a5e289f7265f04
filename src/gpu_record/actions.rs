//! Custom actions for GPU records.
//!
//! This module defines the domain-specific operations (Actions) that can be performed
//! on a [`Gpu`](crate::model::Gpu) record: moving it in and out of the basket.
//! These actions are handled by the [`Entity::handle_action`](crate::framework::Entity::handle_action) method.

use std::fmt::Display;

/// Custom actions for GPU records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuAction {
    /// Puts the record in the basket.
    AddToBasket,
    /// Takes the record out of the basket.
    RemoveFromBasket,
}

/// Result of a basket toggle. The final basket state is the same whether or
/// not the toggle changed anything; the variant says which case happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketOutcome {
    /// Was out, now in.
    Added,
    /// Was already in; nothing changed.
    AlreadyInBasket,
    /// Was in, now out.
    Removed,
    /// Was already out; nothing changed.
    NotInBasket,
}

impl BasketOutcome {
    /// User-facing message for this outcome.
    pub const fn message(self) -> &'static str {
        match self {
            BasketOutcome::Added => "Відеокарта додана в кошик.",
            BasketOutcome::AlreadyInBasket => "Відеокарта вже знаходиться в кошику.",
            BasketOutcome::Removed => "Відеокарта видалена з кошика.",
            BasketOutcome::NotInBasket => "Відеокарти не було в кошику.",
        }
    }

    /// Whether the toggle changed the basket state.
    pub const fn changed(self) -> bool {
        matches!(self, BasketOutcome::Added | BasketOutcome::Removed)
    }
}

impl Display for BasketOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BasketOutcome::Added.to_string(), "Відеокарта додана в кошик.");
        assert_eq!(
            BasketOutcome::AlreadyInBasket.to_string(),
            "Відеокарта вже знаходиться в кошику."
        );
        assert_eq!(BasketOutcome::Removed.to_string(), "Відеокарта видалена з кошика.");
        assert_eq!(BasketOutcome::NotInBasket.to_string(), "Відеокарти не було в кошику.");
    }

    #[test]
    fn test_changed() {
        assert!(BasketOutcome::Added.changed());
        assert!(BasketOutcome::Removed.changed());
        assert!(!BasketOutcome::AlreadyInBasket.changed());
        assert!(!BasketOutcome::NotInBasket.changed());
    }
}
