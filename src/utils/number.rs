//! Numeric input helpers for currency and distance fields.

use crate::errors::{AppError, AppResult};

/// Forgiving parse used by the live preview: blank, garbage, negative or
/// non-finite input all become 0.
pub fn lenient_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(non_negative).unwrap_or(0.0)
}

/// Upper bound for any single amount, distance or per-km rate.
/// Keeps products such as km x rate finite.
pub const MAX_AMOUNT: f64 = 1e9;

/// Strict parse used on submission: the value must be a finite number
/// between 0 and `MAX_AMOUNT`.
pub fn parse_amount(field: &str, raw: &str) -> AppResult<f64> {
    let invalid = || AppError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let v: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !v.is_finite() || !(0.0..=MAX_AMOUNT).contains(&v) {
        return Err(invalid());
    }
    Ok(v)
}

pub fn parse_optional_amount(field: &str, raw: Option<&String>) -> AppResult<Option<f64>> {
    raw.map(|s| parse_amount(field, s)).transpose()
}

pub fn parse_count(field: &str, raw: &str) -> AppResult<u32> {
    raw.trim().parse().map_err(|_| AppError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

pub fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `numerator / denominator`, or 0 when the result would not be finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let r = numerator / denominator;
    if r.is_finite() { r } else { 0.0 }
}
