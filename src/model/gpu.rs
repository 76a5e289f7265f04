use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Architecture;
use crate::gpu_record::{BasketOutcome, ValidationError};
use crate::runtime::CatalogState;

pub const DEFAULT_NAME: &str = "DefaultName";
pub const DEFAULT_CLOCK: u32 = 1000;
pub const DEFAULT_ARCHITECTURE: Architecture = Architecture::Turing;
pub const DEFAULT_MEMORY: u32 = 1;
pub const DEFAULT_BUS_WIDTH: u16 = 128;
pub const DEFAULT_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// The earliest release date a record can carry, 0001-01-01.
pub fn default_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Represents a GPU in the product catalog.
///
/// Every field is validated on construction and on each assignment; a
/// rejected value leaves the record unchanged.
///
/// # Entity Contract
/// This struct implements the [`Entity`](crate::framework::Entity) trait.
///
/// See [`impl Entity for Gpu`](#impl-Entity-for-Gpu) for details on:
/// - Creation parameters ([`GpuCreate`])
/// - Update parameters ([`GpuUpdate`])
/// - Custom actions ([`GpuAction`](crate::gpu_record::GpuAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gpu {
    model_name: String,
    gpu_clock: u32,
    architecture: Architecture,
    memory_size: u32,
    release_date: NaiveDate,
    memory_bus_width: u16,
    launch_price: Decimal,
    in_basket: bool,
}

/// Payload for creating a new GPU record.
///
/// Any field left as `None` falls back to its documented default, so
/// `GpuCreate::default()` describes the all-defaults record and
/// [`GpuCreate::new`] the name/architecture/price form.
#[derive(Debug, Clone, Default)]
pub struct GpuCreate {
    pub model_name: Option<String>,
    pub gpu_clock: Option<u32>,
    pub architecture: Option<Architecture>,
    pub memory_size: Option<u32>,
    pub release_date: Option<NaiveDate>,
    pub memory_bus_width: Option<u16>,
    pub launch_price: Option<Decimal>,
}

/// Payload for updating an existing GPU record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuUpdate {
    pub model_name: Option<String>,
    pub gpu_clock: Option<u32>,
    pub architecture: Option<Architecture>,
    pub memory_size: Option<u32>,
    pub release_date: Option<NaiveDate>,
    pub memory_bus_width: Option<u16>,
    pub launch_price: Option<Decimal>,
}

impl GpuCreate {
    /// Name, architecture and price; everything else takes its default.
    pub fn new(model_name: impl Into<String>, architecture: Architecture, launch_price: Decimal) -> Self {
        Self {
            model_name: Some(model_name.into()),
            architecture: Some(architecture),
            launch_price: Some(launch_price),
            ..Self::default()
        }
    }

    pub fn gpu_clock(mut self, mhz: u32) -> Self {
        self.gpu_clock = Some(mhz);
        self
    }

    pub fn memory_size(mut self, gb: u32) -> Self {
        self.memory_size = Some(gb);
        self
    }

    pub fn release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn memory_bus_width(mut self, bits: u16) -> Self {
        self.memory_bus_width = Some(bits);
        self
    }

    fn form(&self) -> &'static str {
        let named = [
            self.model_name.is_some(),
            self.architecture.is_some(),
            self.launch_price.is_some(),
        ];
        let extra = [
            self.gpu_clock.is_some(),
            self.memory_size.is_some(),
            self.release_date.is_some(),
            self.memory_bus_width.is_some(),
        ];
        let set = |flags: &[bool]| flags.iter().filter(|f| **f).count();
        match (set(&named), set(&extra)) {
            (0, 0) => "defaults",
            (3, 0) => "name_architecture_price",
            (3, 4) => "full",
            _ => "partial",
        }
    }
}

// --- Validation (shared by construction and setters) ---

fn validate_model_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyModelName);
    }
    // UTF-16 code units
    let length = name.encode_utf16().count();
    if !(5..=40).contains(&length) {
        return Err(ValidationError::ModelNameLength(length));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace()) {
        return Err(ValidationError::ModelNameCharset(name));
    }
    Ok(name)
}

fn validate_gpu_clock(mhz: u32) -> Result<u32, ValidationError> {
    if !(1000..=4000).contains(&mhz) {
        return Err(ValidationError::GpuClockOutOfRange(mhz));
    }
    Ok(mhz)
}

fn validate_memory_size(gb: u32) -> Result<u32, ValidationError> {
    if !(1..=32).contains(&gb) {
        return Err(ValidationError::MemorySizeOutOfRange(gb));
    }
    Ok(gb)
}

fn validate_release_date(date: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if date > Local::now().date_naive() {
        return Err(ValidationError::ReleaseDateInFuture(date));
    }
    Ok(date)
}

fn validate_memory_bus_width(bits: u16) -> Result<u16, ValidationError> {
    if !(128..=2048).contains(&bits) {
        return Err(ValidationError::MemoryBusWidthOutOfRange(bits));
    }
    Ok(bits)
}

fn validate_launch_price(price: Decimal) -> Result<Decimal, ValidationError> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(price));
    }
    Ok(price)
}

impl Gpu {
    /// Creates a new GPU record and counts it in the process-wide state.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] hit while checking fields in
    /// declaration order. A failed construction is not counted.
    pub fn new(params: GpuCreate) -> Result<Self, ValidationError> {
        Self::new_in(CatalogState::global(), params)
    }

    /// Creates a new GPU record and counts it in `state`.
    pub fn new_in(state: &CatalogState, params: GpuCreate) -> Result<Self, ValidationError> {
        let form = params.form();
        let gpu = Self {
            model_name: validate_model_name(
                params.model_name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            )?,
            gpu_clock: validate_gpu_clock(params.gpu_clock.unwrap_or(DEFAULT_CLOCK))?,
            architecture: params.architecture.unwrap_or(DEFAULT_ARCHITECTURE),
            memory_size: validate_memory_size(params.memory_size.unwrap_or(DEFAULT_MEMORY))?,
            release_date: validate_release_date(
                params.release_date.unwrap_or_else(default_release_date),
            )?,
            memory_bus_width: validate_memory_bus_width(
                params.memory_bus_width.unwrap_or(DEFAULT_BUS_WIDTH),
            )?,
            launch_price: validate_launch_price(params.launch_price.unwrap_or(DEFAULT_PRICE))?,
            in_basket: true,
        };

        let total = state.record_instance();
        debug!(form, model = %gpu.model_name, total, "GPU record constructed");
        Ok(gpu)
    }

    // --- Getters ---

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn gpu_clock(&self) -> u32 {
        self.gpu_clock
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn memory_size(&self) -> u32 {
        self.memory_size
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn memory_bus_width(&self) -> u16 {
        self.memory_bus_width
    }

    pub fn launch_price(&self) -> Decimal {
        self.launch_price
    }

    pub fn in_basket(&self) -> bool {
        self.in_basket
    }

    // --- Setters ---

    pub fn set_model_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.model_name = validate_model_name(name.into())?;
        Ok(())
    }

    pub fn set_gpu_clock(&mut self, mhz: u32) -> Result<(), ValidationError> {
        self.gpu_clock = validate_gpu_clock(mhz)?;
        Ok(())
    }

    /// Every [`Architecture`] value is a recognized variant, so this cannot fail.
    pub fn set_architecture(&mut self, architecture: Architecture) {
        self.architecture = architecture;
    }

    /// Sets the architecture from its raw discriminant.
    pub fn set_architecture_code(&mut self, code: i32) -> Result<(), ValidationError> {
        self.architecture = Architecture::try_from(code)?;
        Ok(())
    }

    pub fn set_memory_size(&mut self, gb: u32) -> Result<(), ValidationError> {
        self.memory_size = validate_memory_size(gb)?;
        Ok(())
    }

    pub fn set_release_date(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        self.release_date = validate_release_date(date)?;
        Ok(())
    }

    pub fn set_memory_bus_width(&mut self, bits: u16) -> Result<(), ValidationError> {
        self.memory_bus_width = validate_memory_bus_width(bits)?;
        Ok(())
    }

    pub fn set_launch_price(&mut self, price: Decimal) -> Result<(), ValidationError> {
        self.launch_price = validate_launch_price(price)?;
        Ok(())
    }

    // --- Basket ---

    /// Puts the GPU in the basket. Reports [`BasketOutcome::AlreadyInBasket`]
    /// without changing anything if it was already there.
    pub fn add_to_basket(&mut self) -> BasketOutcome {
        if self.in_basket {
            return BasketOutcome::AlreadyInBasket;
        }
        self.in_basket = true;
        info!(model = %self.model_name, "Added to basket");
        BasketOutcome::Added
    }

    /// Takes the GPU out of the basket. Reports [`BasketOutcome::NotInBasket`]
    /// without changing anything if it was not there.
    pub fn remove_from_basket(&mut self) -> BasketOutcome {
        if !self.in_basket {
            return BasketOutcome::NotInBasket;
        }
        self.in_basket = false;
        info!(model = %self.model_name, "Removed from basket");
        BasketOutcome::Removed
    }

    // --- Release age ---

    /// Current local year minus the release year. Month and day are ignored.
    pub fn years_since_release(&self) -> i32 {
        self.years_since_release_at(Local::now().date_naive())
    }

    /// Year of `as_of` minus the release year. Negative when `as_of` precedes the release year.
    pub fn years_since_release_at(&self, as_of: NaiveDate) -> i32 {
        as_of.year() - self.release_date.year()
    }

    // --- Shared catalog state ---

    /// Number of records constructed against the process-wide state.
    pub fn instance_count() -> u64 {
        CatalogState::global().instance_count()
    }

    /// Process-wide discount rate.
    pub fn discount() -> Decimal {
        CatalogState::global().discount()
    }

    /// Replaces the process-wide discount rate; must be within `0..=1`.
    pub fn set_discount(rate: Decimal) -> Result<(), ValidationError> {
        CatalogState::global().set_discount(rate)
    }

    /// Applies the process-wide discount to `price`.
    ///
    /// This works on the given price only and never looks at a record's launch price.
    pub fn price_with_discount(price: Decimal) -> Decimal {
        CatalogState::global().price_with_discount(price)
    }
}
