//! Error types for GPU catalog records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A candidate value violated a field or discount constraint.
///
/// Returned by every setter; the target is never mutated when this is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The model name is empty or only whitespace.
    #[error("Назва моделі не може бути порожньою.")]
    EmptyModelName,

    /// The model name length is outside 5..=40 UTF-16 code units.
    #[error("Довжина назви моделі має бути від 5 до 40 символів.")]
    ModelNameLength(usize),

    /// The model name contains something other than ASCII letters, digits, or whitespace.
    #[error("Назва моделі може містити лише латинські літери та цифри.")]
    ModelNameCharset(String),

    /// The GPU clock is outside 1000..=4000 MHz.
    #[error("Частота GPU має бути в діапазоні 1000-4000 МГц.")]
    GpuClockOutOfRange(u32),

    /// The raw architecture code does not name a known variant.
    #[error("Архітектура не коректна.")]
    UnknownArchitecture(i32),

    /// The memory size is outside 1..=32 GB.
    #[error("Об'єм пам'яті має бути в діапазоні 1–32 ГБ.")]
    MemorySizeOutOfRange(u32),

    /// The release date lies after today.
    #[error("Дата випуску не може бути у майбутньому.")]
    ReleaseDateInFuture(NaiveDate),

    /// The memory bus width is outside 128..=2048 bits.
    #[error("Розрядність шини має бути в діапазоні 128-2048 біт.")]
    MemoryBusWidthOutOfRange(u16),

    /// The launch price is zero or negative.
    #[error("Ціна на релізі має бути більше 0.")]
    NonPositivePrice(Decimal),

    /// The discount rate is outside 0..=1.
    #[error("Знижка повинна бути в діапазоні від 0 до 100%.")]
    DiscountOutOfRange(Decimal),
}

/// Text could not be parsed into a GPU record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    /// The input was empty.
    #[error("Строка не може бути нулем або пустою.")]
    Empty,

    /// Splitting on `;` did not yield exactly three segments.
    #[error("Строка неправильного формату.")]
    SegmentCount(usize),

    /// The architecture segment is not a known variant name.
    #[error("Архітектура не коректна.")]
    Architecture(String),

    /// The price segment is not a valid decimal.
    #[error("Значення ціни не коректне.")]
    Price(String),

    /// The segments parsed, but the resulting record failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
