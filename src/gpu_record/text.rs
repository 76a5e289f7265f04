//! Semicolon-delimited text form of a GPU record.
//!
//! The format is `<model name>;<architecture>;<launch price>`, for example
//! `Gigabyte GeForce RTX 5060 Ti;Blackwell;470`. Only these three fields travel
//! through text; a parsed record takes the defaults for everything else.

use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

use super::error::FormatError;
use crate::model::{Architecture, Gpu, GpuCreate};
use crate::runtime::CatalogState;

const SEPARATOR: char = ';';

impl Display for Gpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.model_name(),
            self.architecture(),
            self.launch_price()
        )
    }
}

impl FromStr for Gpu {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gpu::parse(s)
    }
}

/// Plain decimal notation: optional sign, digits, at most one `.`.
/// Exponents and digit separators are not accepted.
fn parse_price(raw: &str) -> Result<Decimal, FormatError> {
    let text = raw.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let plain = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !plain {
        return Err(FormatError::Price(raw.to_string()));
    }
    let sign_free = text.strip_prefix('+').unwrap_or(text);
    Decimal::from_str(sign_free).map_err(|_| FormatError::Price(raw.to_string()))
}

impl Gpu {
    /// Parses `<model name>;<architecture>;<launch price>` into a new record.
    ///
    /// The architecture is matched case-insensitively. The record is built with
    /// [`GpuCreate::new`] and counted in the process-wide state.
    ///
    /// # Errors
    /// - [`FormatError::Empty`] for empty input
    /// - [`FormatError::SegmentCount`] unless there are exactly three segments
    /// - [`FormatError::Architecture`] for an unknown architecture name
    /// - [`FormatError::Price`] for a price that is not a plain decimal number
    /// - [`FormatError::Invalid`] when a segment parses but fails field validation
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        Self::parse_in(CatalogState::global(), s)
    }

    /// Like [`Gpu::parse`], but counts the record in `state`.
    pub fn parse_in(state: &CatalogState, s: &str) -> Result<Self, FormatError> {
        if s.is_empty() {
            return Err(FormatError::Empty);
        }

        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        let [name, architecture, price] = parts.as_slice() else {
            return Err(FormatError::SegmentCount(parts.len()));
        };

        let architecture: Architecture = architecture.parse()?;
        let price = parse_price(price)?;

        Ok(Gpu::new_in(state, GpuCreate::new(*name, architecture, price))?)
    }

    /// Like [`Gpu::parse`], but logs the failure and returns `None` instead of an error.
    pub fn try_parse(s: &str) -> Option<Self> {
        match Gpu::parse(s) {
            Ok(gpu) => Some(gpu),
            Err(e) => {
                warn!(input = s, error = %e, "Failed to parse GPU record");
                None
            }
        }
    }
}
