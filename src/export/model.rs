// src/export/model.rs

use crate::models::session::Session;
use crate::utils::number::round2;
use serde::Serialize;

/// Flat row for exporting sessions with their estimate alongside.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub platform: String,
    pub total_orders: Option<u32>,
    pub total_distance_km: f64,
    pub gross_earnings: f64,
    pub tips: f64,
    pub fuel_cost: f64,
    pub depreciation_cost: f64,
    pub other_expenses: f64,
    pub platform_fee: f64,
    pub duration_hours: f64,
    pub estimated_net_profit: f64,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        let m = s.metrics();
        Self {
            id: s.id,
            date: s.draft.date.format("%Y-%m-%d").to_string(),
            start_time: s.draft.start_time.to_string(),
            end_time: s.draft.end_time.to_string(),
            platform: s.platform_name.clone(),
            total_orders: s.draft.total_orders,
            total_distance_km: s.draft.total_distance_km,
            gross_earnings: s.draft.gross_earnings,
            tips: s.draft.tips,
            fuel_cost: s.draft.fuel_cost,
            depreciation_cost: s.draft.depreciation_cost,
            other_expenses: s.draft.other_expenses,
            platform_fee: s.platform_fee,
            duration_hours: round2(m.duration_hours),
            estimated_net_profit: round2(m.net_profit),
        }
    }
}
