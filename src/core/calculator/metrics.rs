//! Derived per-session figures shown in the entry preview and history.
//!
//! Everything here is a *local estimate*: rent, platform commission and taxes
//! are charged elsewhere (see `settlement`) and never folded into these
//! numbers.

use crate::core::calculator::duration::compute_duration;
use crate::models::profile::TransportType;
use crate::models::session::SessionDraft;
use crate::utils::number::{non_negative, safe_ratio};
use serde::Serialize;

/// Footnote printed next to every estimated profit figure.
pub const ESTIMATE_NOTE: &str = "*Excludes rent, fees, taxes";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedMetrics {
    pub duration_hours: f64,
    pub total_earnings: f64,
    pub total_costs: f64,
    pub net_profit: f64,
    pub profit_per_hour: f64,
    pub profit_per_km: f64,
    pub profit_per_order: f64,
}

/// Compute the estimate for a draft.
///
/// Negative or non-finite amounts count as 0. When `transport` is a
/// non-fuel vehicle the fuel cost is ignored whatever the draft says.
/// Ratios with a zero denominator are 0.
pub fn compute_derived_metrics(
    draft: &SessionDraft,
    transport: Option<TransportType>,
) -> DerivedMetrics {
    let duration_hours = compute_duration(draft.start_time, draft.end_time);

    let fuel = match transport {
        Some(t) if t.is_fuel_free() => 0.0,
        _ => non_negative(draft.fuel_cost),
    };

    let total_earnings = non_negative(draft.gross_earnings) + non_negative(draft.tips);
    let total_costs =
        fuel + non_negative(draft.depreciation_cost) + non_negative(draft.other_expenses);
    let net_profit = total_earnings - total_costs;

    let orders = draft.total_orders.unwrap_or(0) as f64;

    DerivedMetrics {
        duration_hours,
        total_earnings,
        total_costs,
        net_profit,
        profit_per_hour: safe_ratio(net_profit, duration_hours),
        profit_per_km: safe_ratio(net_profit, non_negative(draft.total_distance_km)),
        profit_per_order: safe_ratio(net_profit, orders),
    }
}
