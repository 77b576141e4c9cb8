//! Decimal helpers: display rounding and input-boundary coercion.
//!
//! Monetary values are kept at full precision internally; rounding to two
//! fractional digits happens once, at the display boundary. Free-form form
//! input is normalized here rather than rejected: the reference behavior is
//! that a malformed amount or count silently becomes zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to 2 fractional digits for display.
///
/// Midpoint rounds away from zero, matching how the UI formats amounts.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce a free-form amount field to a non-negative decimal.
///
/// Malformed or negative input normalizes to zero. This is a silent policy,
/// not a reported failure.
pub fn amount_from_input(raw: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}

/// Coerce a free-form count field to a non-negative integer.
///
/// Same normalization policy as [`amount_from_input`].
pub fn quantity_from_input(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
