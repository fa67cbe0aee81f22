//! Formatting helpers for MT940 fields: amounts, dates and bounded-width
//! text chunks.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount with exactly two decimals and a comma separator,
/// rounding half away from zero: `1234.5` becomes `"1234,50"`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    format!("{:.2}", rounded).replace('.', ",")
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(Error::DateParse(format!("expected YYYY-MM-DD, got {:?}", raw)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::DateParse(format!("not a calendar date: {:?}", raw)))
}

/// Format NaiveDate as MT940 `YYMMDD`.
pub fn format_yymmdd(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Format NaiveDate as MT940 entry date `MMDD`.
pub fn format_mmdd(date: NaiveDate) -> String {
    date.format("%m%d").to_string()
}

/// `YYYY-MM-DD` to `YYMMDD`.
pub fn format_date(raw: &str) -> Result<String> {
    parse_date(raw).map(format_yymmdd)
}

/// `YYYY-MM-DD` to `MMDD`.
pub fn format_month_day(raw: &str) -> Result<String> {
    parse_date(raw).map(format_mmdd)
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Split free text into slices of `width` characters.
///
/// Line breaks become spaces and the text is trimmed first; the last slice
/// may be shorter. Empty input gives no chunks.
pub fn chunk_text(text: &str, width: usize) -> Vec<String> {
    let normalized: Vec<char> = text
        .replace(['\r', '\n'], " ")
        .trim()
        .chars()
        .collect();

    if width == 0 {
        return Vec::new();
    }

    normalized
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
