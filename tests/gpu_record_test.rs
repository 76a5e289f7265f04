use chrono::NaiveDate;
use gpu_catalog::gpu_record::{BasketOutcome, FormatError};
use gpu_catalog::model::{Architecture, Gpu, GpuCreate};
use gpu_catalog::runtime::CatalogState;
use rust_decimal::Decimal;

/// A fresh all-defaults record for each test.
fn setup() -> Gpu {
    Gpu::new(GpuCreate::default()).expect("Default record must be valid")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_years_since_release_date_after_release() {
    // Arrange
    let mut gpu = setup();
    gpu.set_release_date(date(2020, 5, 18)).unwrap();
    let selected_date = date(2024, 5, 3);

    // Act
    let actual = gpu.years_since_release_at(selected_date);

    // Assert
    assert_eq!(actual, 4);
}

#[test]
fn test_years_since_release_date_before_release() {
    // Arrange
    let mut gpu = setup();
    gpu.set_release_date(date(2020, 5, 18)).unwrap();
    let selected_date = date(1976, 5, 3);

    // Act
    let actual = gpu.years_since_release_at(selected_date);

    // Assert: plain difference of the year components
    assert_eq!(actual, 1976 - 2020);
}

#[test]
fn test_years_since_release_one_year_before_release() {
    let mut gpu = setup();
    gpu.set_release_date(date(2020, 5, 18)).unwrap();

    let actual = gpu.years_since_release_at(date(2019, 5, 3));

    assert_eq!(actual, -1);
}

#[test]
fn test_add_to_basket_was_in_basket() {
    let mut gpu = setup();
    gpu.add_to_basket();

    let actual = gpu.add_to_basket();

    assert_eq!(actual.message(), "Відеокарта вже знаходиться в кошику.");
    assert!(gpu.in_basket());
}

#[test]
fn test_add_to_basket_was_not_in_basket() {
    let mut gpu = setup();
    gpu.remove_from_basket();

    let actual = gpu.add_to_basket();

    assert_eq!(actual.message(), "Відеокарта додана в кошик.");
    assert!(gpu.in_basket());
}

#[test]
fn test_remove_from_basket_was_in_basket() {
    let mut gpu = setup();
    gpu.add_to_basket();

    let actual = gpu.remove_from_basket();

    assert_eq!(actual.message(), "Відеокарта видалена з кошика.");
    assert!(!gpu.in_basket());
}

#[test]
fn test_remove_from_basket_was_not_in_basket() {
    let mut gpu = setup();
    gpu.remove_from_basket();

    let actual = gpu.remove_from_basket();

    assert_eq!(actual, BasketOutcome::NotInBasket);
    assert_eq!(actual.message(), "Відеокарти не було в кошику.");
    assert!(!gpu.in_basket());
}

/// The only test in this binary that touches the process-wide discount.
#[test]
fn test_price_with_discount() {
    // Arrange
    let price = Decimal::new(1000, 1);
    let expected = Decimal::new(800, 1);
    let mut gpu = setup();

    Gpu::set_discount(Decimal::new(2, 1)).unwrap();
    gpu.set_launch_price(price).unwrap();

    // Act
    let actual = Gpu::price_with_discount(price);

    // Assert
    assert!(
        (actual - expected).abs() <= Decimal::new(1, 2),
        "expected {} got {}",
        expected,
        actual
    );

    // Out-of-range rates are rejected and the rate stays put
    assert!(Gpu::set_discount(Decimal::new(-1, 1)).is_err());
    assert!(Gpu::set_discount(Decimal::new(11, 1)).is_err());
    assert_eq!(Gpu::discount(), Decimal::new(2, 1));
}

#[test]
fn test_price_with_discount_ignores_record_price() {
    let state = CatalogState::with_discount(Decimal::new(1, 1)).unwrap();
    let mut gpu = Gpu::new_in(&state, GpuCreate::default()).unwrap();
    gpu.set_launch_price(Decimal::new(999, 0)).unwrap();

    // Only the argument matters, never the record's own price
    assert_eq!(state.price_with_discount(Decimal::new(50, 0)), Decimal::new(45, 0));
}

#[test]
fn test_default_record_fields() {
    let gpu = setup();
    assert_eq!(gpu.model_name(), "DefaultName");
    assert_eq!(gpu.gpu_clock(), 1000);
    assert_eq!(gpu.architecture(), Architecture::Turing);
    assert_eq!(gpu.memory_size(), 1);
    assert_eq!(gpu.memory_bus_width(), 128);
    assert_eq!(gpu.launch_price(), Decimal::new(1, 2));
    assert_eq!(gpu.release_date(), date(1, 1, 1));
}

#[test]
fn test_default_record_is_in_basket() {
    // Kept as observed: a freshly constructed record starts in the basket.
    assert!(setup().in_basket());
}

#[test]
fn test_instance_count_grows_with_construction() {
    let before = Gpu::instance_count();
    let _a = setup();
    let _b = setup();
    assert!(Gpu::instance_count() >= before + 2);
}

#[test]
fn test_to_text() {
    let gpu = Gpu::new(GpuCreate::new(
        "Gigabyte GeForce RTX 5060 Ti",
        Architecture::Blackwell,
        Decimal::new(470, 0),
    ))
    .unwrap();

    assert_eq!(gpu.to_string(), "Gigabyte GeForce RTX 5060 Ti;Blackwell;470");
}

#[test]
fn test_parse_and_try_parse_failures() {
    let cases = [
        ("", FormatError::Empty),
        ("One;Two", FormatError::SegmentCount(2)),
        ("GeForce RTX 3060;Pascal;329", FormatError::Architecture("Pascal".into())),
        ("GeForce RTX 3060;Ampere;n/a", FormatError::Price("n/a".into())),
    ];

    for (input, expected) in cases {
        assert_eq!(Gpu::parse(input).unwrap_err(), expected, "input {:?}", input);
        assert!(Gpu::try_parse(input).is_none(), "input {:?}", input);
    }
}

#[test]
fn test_parse_uses_defaults_for_untransported_fields() {
    let gpu = Gpu::parse("Radeon RX 9070 XT;BLACKWELL;599").unwrap();
    assert_eq!(gpu.architecture(), Architecture::Blackwell);
    assert_eq!(gpu.gpu_clock(), 1000);
    assert_eq!(gpu.memory_size(), 1);
    assert_eq!(gpu.memory_bus_width(), 128);
    assert_eq!(gpu.release_date(), date(1, 1, 1));
}
