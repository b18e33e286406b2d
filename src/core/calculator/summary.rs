//! Period aggregation behind the `summary` dashboard.

use crate::core::calculator::settlement::daily_rent;
use crate::models::profile::CourierProfile;
use crate::models::session::Session;
use crate::utils::date::{first_day_of_month, week_start};
use crate::utils::number::safe_ratio;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    Today,
    Week,
    Month,
}

impl SummaryPeriod {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "today" | "day" => Some(SummaryPeriod::Today),
            "week" => Some(SummaryPeriod::Week),
            "month" => Some(SummaryPeriod::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPeriod::Today => "today",
            SummaryPeriod::Week => "week",
            SummaryPeriod::Month => "month",
        }
    }

    /// Inclusive date range ending on `reference` (the courier's local day).
    /// Weeks start on Monday.
    pub fn bounds(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            SummaryPeriod::Today => (reference, reference),
            SummaryPeriod::Week => (week_start(reference), reference),
            SummaryPeriod::Month => (first_day_of_month(reference), reference),
        }
    }
}

/// One point of the earnings-vs-costs series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub earnings: f64,
    pub costs: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub session_count: usize,
    pub active_days: usize,
    pub total_orders: u64,
    pub total_distance_km: f64,
    pub total_hours: f64,
    pub total_earnings: f64,
    /// Fuel + depreciation + other, as entered per session.
    pub estimated_costs: f64,
    pub platform_fees: f64,
    pub rent: f64,
    pub total_costs: f64,
    pub total_net_profit: f64,
    pub avg_profit_per_hour: f64,
    pub profit_per_km: f64,
    pub profit_per_order: f64,
    pub chart: Vec<DailyPoint>,
    pub recent: Vec<Session>,
}

/// Aggregate the sessions falling inside `from..=to`.
///
/// Rent is charged once per day with at least one session. Platform fees
/// come from the snapshot stored with each session.
pub fn build_summary(
    sessions: &[Session],
    profile: &CourierProfile,
    from: NaiveDate,
    to: NaiveDate,
    recent_limit: usize,
) -> PeriodSummary {
    let rent_per_day = daily_rent(profile);

    let mut in_range: Vec<&Session> = sessions
        .iter()
        .filter(|s| s.draft.date >= from && s.draft.date <= to)
        .collect();

    let mut days: BTreeMap<NaiveDate, DailyPoint> = BTreeMap::new();

    let mut total_orders = 0u64;
    let mut total_distance_km = 0.0;
    let mut total_hours = 0.0;
    let mut total_earnings = 0.0;
    let mut estimated_costs = 0.0;
    let mut platform_fees = 0.0;

    for s in &in_range {
        let m = s.metrics();

        total_orders += s.draft.total_orders.unwrap_or(0) as u64;
        total_distance_km += s.draft.total_distance_km;
        total_hours += m.duration_hours;
        total_earnings += m.total_earnings;
        estimated_costs += m.total_costs;
        platform_fees += s.platform_fee;

        let point = days.entry(s.draft.date).or_insert_with(|| DailyPoint {
            date: s.draft.date,
            earnings: 0.0,
            costs: rent_per_day,
            profit: 0.0,
        });
        point.earnings += m.total_earnings;
        point.costs += m.total_costs + s.platform_fee;
    }

    for point in days.values_mut() {
        point.profit = point.earnings - point.costs;
    }

    let active_days = days.len();
    let rent = rent_per_day * active_days as f64;
    let total_costs = estimated_costs + platform_fees + rent;
    let total_net_profit = total_earnings - total_costs;

    let session_count = in_range.len();

    // newest first
    in_range.sort_by(|a, b| {
        (b.draft.date, b.draft.start_time, b.id).cmp(&(a.draft.date, a.draft.start_time, a.id))
    });
    let recent = in_range.into_iter().take(recent_limit).cloned().collect();

    PeriodSummary {
        from,
        to,
        session_count,
        active_days,
        total_orders,
        total_distance_km,
        total_hours,
        total_earnings,
        estimated_costs,
        platform_fees,
        rent,
        total_costs,
        total_net_profit,
        avg_profit_per_hour: safe_ratio(total_net_profit, total_hours),
        profit_per_km: safe_ratio(total_net_profit, total_distance_km),
        profit_per_order: safe_ratio(total_net_profit, total_orders as f64),
        chart: days.into_values().collect(),
        recent,
    }
}
