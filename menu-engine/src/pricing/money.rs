//! Money display helpers using rust_decimal
//!
//! Arithmetic stays exact; rounding to whole currency units happens only
//! when a value is shown or persisted as an order total.

use rust_decimal::prelude::*;

/// Displayed amounts have no fractional part
const DISPLAY_DECIMAL_PLACES: u32 = 0;

/// Round half-up (away from zero) to whole currency units
#[inline]
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with its currency symbol, e.g. `₹520`
pub fn format_price(symbol: &str, value: Decimal) -> String {
    let rounded = round_display(value).normalize();
    format!("{symbol}{rounded}")
}

/// Convert an `f64` coming from an untyped source into a `Decimal`
///
/// Non-finite input becomes zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a `Decimal` into an `f64` for presentation layers without decimals
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
