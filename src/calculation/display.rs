//! Display rounding and currency formatting.
//!
//! Rounding happens in `rust_decimal` on the exact binary value of the
//! `f64`, half away from zero, so a rate is never nudged across a cent
//! boundary by an intermediate decimal conversion.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `places` decimals, half away from zero.
///
/// Non-finite values are returned unchanged.
pub fn round_half_away(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(value)
}

/// Rounds an hourly rate to cents for charting.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::round_to_cents;
///
/// assert_eq!(round_to_cents(54.500_000_000_000_01), 54.5);
/// assert_eq!(round_to_cents(56.724), 56.72);
/// assert_eq!(round_to_cents(0.125), 0.13);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    round_half_away(value, 2)
}

/// Formats a dollar amount as en-US currency with no fractional digits.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::format_currency;
///
/// assert_eq!(format_currency(12_345.5), "$12,346");
/// assert_eq!(format_currency(-987.4), "-$987");
/// assert_eq!(format_currency(0.0), "$0");
/// ```
pub fn format_currency(value: f64) -> String {
    let Some(amount) = Decimal::from_f64_retain(value) else {
        return format!("${}", value);
    };

    let rounded = amount
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}", sign, group_thousands(&rounded.to_string()))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
