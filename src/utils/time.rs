//! Time utilities: normalizing free-form clock text into canonical `HH:MM`.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use regex::Regex;
use std::sync::LazyLock;

static TIME_24H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("24h time pattern")
});

static TIME_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)$").expect("12h time pattern")
});

/// Parse `18:30`, `6:00`, `6:00 PM`, `12:30am`, ... into a [`ClockTime`].
///
/// - empty (after trimming) → `Ok(None)`, the caller decides if that is fine
/// - 24-hour grammar is tried first, then 12-hour with AM/PM
/// - anything else → `AppError::InvalidTimeFormat`
pub fn normalize_time(raw: &str) -> AppResult<Option<ClockTime>> {
    let input = raw.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(caps) = TIME_24H.captures(input) {
        let hour: u32 = caps[1].parse().map_err(|_| invalid(raw))?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid(raw))?;
        return ClockTime::from_hm(hour, minute).map(Some).ok_or_else(|| invalid(raw));
    }

    if let Some(caps) = TIME_12H.captures(input) {
        let mut hour: u32 = caps[1].parse().map_err(|_| invalid(raw))?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid(raw))?;
        let pm = caps[3].eq_ignore_ascii_case("PM");

        if pm && hour < 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }

        return ClockTime::from_hm(hour, minute).map(Some).ok_or_else(|| invalid(raw));
    }

    Err(invalid(raw))
}

fn invalid(raw: &str) -> AppError {
    AppError::InvalidTimeFormat(raw.trim().to_string())
}

/// Format fractional hours as `4.5 hrs`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1} hrs", hours)
}

/// Format fractional hours as `04h 30m`.
pub fn hours2readable(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}
