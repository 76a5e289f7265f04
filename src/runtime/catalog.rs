//! Process-wide catalog state shared by every GPU record.
//!
//! Two values are shared across records rather than owned by one:
//!
//! - the **instance counter**, bumped once per successfully constructed record;
//! - the **discount rate**, read by the pricing helper.
//!
//! Both live in one [`CatalogState`] behind a single mutex. Records built with
//! [`Gpu::new`](crate::model::Gpu::new) use the lazily initialized
//! [`CatalogState::global`] instance; tests and embedders can inject their own
//! state through [`Gpu::new_in`](crate::model::Gpu::new_in).

use rust_decimal::Decimal;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::gpu_record::ValidationError;

/// Discount applied until someone changes it: 15%.
pub const DEFAULT_DISCOUNT: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

static GLOBAL: LazyLock<CatalogState> = LazyLock::new(|| {
    debug!(discount = %DEFAULT_DISCOUNT, "Initializing shared catalog state");
    CatalogState::new()
});

#[derive(Debug)]
struct Ledger {
    instances: u64,
    discount: Decimal,
}

/// Shared instance counter and discount rate.
#[derive(Debug)]
pub struct CatalogState {
    ledger: Mutex<Ledger>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Creates a state with no recorded instances and the default discount.
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                instances: 0,
                discount: DEFAULT_DISCOUNT,
            }),
        }
    }

    /// Creates a state with a custom starting discount.
    ///
    /// # Errors
    /// Returns [`ValidationError::DiscountOutOfRange`] if `rate` is outside `0..=1`.
    pub fn with_discount(rate: Decimal) -> Result<Self, ValidationError> {
        let state = Self::new();
        state.set_discount(rate)?;
        Ok(state)
    }

    /// The process-wide state, initialized on first access.
    pub fn global() -> &'static CatalogState {
        &GLOBAL
    }

    // Every write is validated before it lands, so a poisoned ledger is still consistent.
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records constructed against this state.
    pub fn instance_count(&self) -> u64 {
        self.ledger().instances
    }

    pub(crate) fn record_instance(&self) -> u64 {
        let mut ledger = self.ledger();
        ledger.instances += 1;
        ledger.instances
    }

    /// Current discount rate, a fraction in `0..=1`.
    pub fn discount(&self) -> Decimal {
        self.ledger().discount
    }

    /// Replaces the discount rate.
    ///
    /// # Errors
    /// Returns [`ValidationError::DiscountOutOfRange`] if `rate` is outside `0..=1`;
    /// the previous rate is kept.
    pub fn set_discount(&self, rate: Decimal) -> Result<(), ValidationError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(ValidationError::DiscountOutOfRange(rate));
        }
        self.ledger().discount = rate;
        debug!(discount = %rate, "Discount updated");
        Ok(())
    }

    /// Applies the current discount to `price`: `price * (1 - discount)`.
    pub fn price_with_discount(&self, price: Decimal) -> Decimal {
        price * (Decimal::ONE - self.discount())
    }
}
