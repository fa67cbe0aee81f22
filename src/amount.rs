//! Lenient decimal parsing for ledger amounts.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a ledger amount, accepting either `,` or `.` as the fractional
/// separator and ignoring embedded spaces.
///
/// Returns `None` when the value is non-empty but not a number, so the
/// caller can report it before substituting zero.
pub fn try_parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).ok()
}

/// Parse a ledger amount; empty or unparsable input yields zero.
pub fn parse_amount(raw: &str) -> Decimal {
    try_parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Resolve an optional numeric field, logging values that had to be zeroed.
pub(crate) fn amount_or_zero(raw: Option<&str>, what: &str) -> Decimal {
    match raw {
        None => {
            log::debug!("{what} missing, using 0");
            Decimal::ZERO
        }
        Some(value) => try_parse_amount(value).unwrap_or_else(|| {
            log::warn!("{what} {value:?} is not a number, using 0");
            Decimal::ZERO
        }),
    }
}
