//! Charges that are not part of the local estimate: fleet commission and
//! vehicle rent.

use crate::models::profile::CourierProfile;
use crate::utils::number::{non_negative, round2};

/// Commission taken from gross earnings, rounded to cents.
pub fn platform_fee(gross_earnings: f64, fee_percent: f64) -> f64 {
    let pct = if fee_percent.is_finite() {
        fee_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    round2(non_negative(gross_earnings) * pct / 100.0)
}

/// Rent charged for one working day, spreading weekly/monthly rent evenly.
pub fn daily_rent(profile: &CourierProfile) -> f64 {
    non_negative(profile.rent_amount) / profile.rent_frequency.days()
}
