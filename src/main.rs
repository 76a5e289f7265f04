//! Demo: builds a few GPU records, toggles the basket, applies the shared
//! discount and round-trips records through their text form.

use chrono::NaiveDate;
use gpu_catalog::framework::Entity;
use gpu_catalog::gpu_record::GpuAction;
use gpu_catalog::model::{Architecture, Gpu, GpuCreate, GpuUpdate};
use gpu_catalog::runtime::setup_tracing;
use rust_decimal::Decimal;
use tracing::{error, info};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting GPU catalog demo");

    // All three creation forms
    let mut default_gpu = Gpu::new(GpuCreate::default()).map_err(|e| e.to_string())?;
    let short = Gpu::new(GpuCreate::new(
        "Gigabyte GeForce RTX 5060 Ti",
        Architecture::Blackwell,
        Decimal::new(470, 0),
    ))
    .map_err(|e| e.to_string())?;
    let release = NaiveDate::from_ymd_opt(2022, 10, 12).ok_or("invalid release date")?;
    let full = Gpu::new(
        GpuCreate::new("GeForce RTX 4090", Architecture::AdaLovelace, Decimal::new(1599, 0))
            .gpu_clock(2520)
            .memory_size(24)
            .release_date(release)
            .memory_bus_width(384),
    )
    .map_err(|e| e.to_string())?;

    info!(count = Gpu::instance_count(), "Records constructed");

    full.print_info().map_err(|e| e.to_string())?;
    println!("{}", short);
    println!("Років з релізу: {}", full.years_since_release());

    // Basket toggles
    for action in [
        GpuAction::AddToBasket,
        GpuAction::RemoveFromBasket,
        GpuAction::RemoveFromBasket,
        GpuAction::AddToBasket,
    ] {
        let outcome = default_gpu.handle_action(action).map_err(|e| e.to_string())?;
        println!("{}", outcome);
    }

    // Rejected update keeps the record as it was
    let update = GpuUpdate {
        gpu_clock: Some(5000),
        ..GpuUpdate::default()
    };
    if let Err(e) = default_gpu.on_update(update) {
        error!(error = %e, "Update rejected");
    }

    // Shared discount
    Gpu::set_discount(Decimal::new(2, 1)).map_err(|e| e.to_string())?;
    println!(
        "Ціна зі знижкою: {} $",
        Gpu::price_with_discount(full.launch_price()).round_dp(2)
    );
    if let Err(e) = Gpu::set_discount(Decimal::TWO) {
        error!(error = %e, "Discount rejected");
    }

    // Text round-trip
    let text = short.to_string();
    let parsed = Gpu::parse(&text).map_err(|e| e.to_string())?;
    info!(%parsed, "Parsed record");
    if Gpu::try_parse("RTX;Kepler;1").is_none() {
        info!("Malformed record skipped");
    }

    info!(count = Gpu::instance_count(), "Demo completed successfully");
    Ok(())
}
