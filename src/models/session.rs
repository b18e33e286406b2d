use crate::core::calculator::metrics::{DerivedMetrics, compute_derived_metrics};
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::profile::{CourierProfile, TransportType};
use crate::utils::date::parse_date;
use crate::utils::number::{lenient_amount, non_negative, round2};
use chrono::NaiveDate;
use serde::Serialize;

/// Editable fields of a session draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    StartTime,
    EndTime,
    Platform,
    TotalOrders,
    TotalDistanceKm,
    GrossEarnings,
    Tips,
    FuelCost,
    DepreciationCost,
    OtherExpenses,
}

/// One work session, either being edited or ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub platform_id: Option<i64>,
    pub total_orders: Option<u32>,
    pub total_distance_km: f64,
    pub gross_earnings: f64,
    pub tips: f64,
    pub fuel_cost: f64,
    pub depreciation_cost: f64,
    pub other_expenses: f64,
}

impl SessionDraft {
    pub fn new(date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date,
            start_time,
            end_time,
            platform_id: None,
            total_orders: None,
            total_distance_km: 0.0,
            gross_earnings: 0.0,
            tips: 0.0,
            fuel_cost: 0.0,
            depreciation_cost: 0.0,
            other_expenses: 0.0,
        }
    }

    /// Update a single field from raw form text.
    ///
    /// Numbers are parsed leniently (blank or garbage becomes 0) so a live
    /// preview never breaks mid-edit. Dates and times are validated: on
    /// error the previous value is kept and the error is returned for
    /// display next to the field.
    pub fn set_field(&mut self, field: DraftField, raw: &str) -> AppResult<()> {
        match field {
            DraftField::Date => {
                self.date =
                    parse_date(raw.trim()).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            }
            DraftField::StartTime => {
                if let Some(t) = ClockTime::parse_optional(raw)? {
                    self.start_time = t;
                }
            }
            DraftField::EndTime => {
                if let Some(t) = ClockTime::parse_optional(raw)? {
                    self.end_time = t;
                }
            }
            DraftField::Platform => self.platform_id = raw.trim().parse().ok(),
            DraftField::TotalOrders => self.total_orders = raw.trim().parse().ok(),
            DraftField::TotalDistanceKm => self.total_distance_km = lenient_amount(raw),
            DraftField::GrossEarnings => self.gross_earnings = lenient_amount(raw),
            DraftField::Tips => self.tips = lenient_amount(raw),
            DraftField::FuelCost => self.fuel_cost = lenient_amount(raw),
            DraftField::DepreciationCost => self.depreciation_cost = lenient_amount(raw),
            DraftField::OtherExpenses => self.other_expenses = lenient_amount(raw),
        }
        Ok(())
    }

    /// Seed the depreciation cost from the profile rate (km × rate, 2 decimals).
    /// Leaves the field alone when no distance has been entered yet or the
    /// product does not fit in a finite amount.
    pub fn apply_profile_depreciation(&mut self, profile: &CourierProfile) {
        let km = non_negative(self.total_distance_km);
        let cost = round2(km * non_negative(profile.default_depreciation_rate_per_km));
        if km > 0.0 && cost.is_finite() {
            self.depreciation_cost = cost;
        }
    }

    /// Force the fuel cost to 0 for non-fuel vehicles.
    /// Returns true when a non-zero value had to be discarded.
    pub fn apply_vehicle_policy(&mut self, transport: TransportType) -> bool {
        if !transport.is_fuel_free() {
            return false;
        }
        let discarded = self.fuel_cost != 0.0;
        self.fuel_cost = 0.0;
        discarded
    }

    /// Local estimate for the current state of the draft.
    pub fn preview(&self, profile: &CourierProfile) -> DerivedMetrics {
        compute_derived_metrics(self, Some(profile.transport_type))
    }

    /// Prepare the draft for persistence: a platform is required, amounts
    /// are clamped to non-negative values and the vehicle policy applied.
    pub fn finalize(mut self, profile: &CourierProfile) -> AppResult<SessionDraft> {
        if self.platform_id.is_none() {
            return Err(AppError::MissingPlatform);
        }

        self.total_distance_km = non_negative(self.total_distance_km);
        self.gross_earnings = non_negative(self.gross_earnings);
        self.tips = non_negative(self.tips);
        self.fuel_cost = non_negative(self.fuel_cost);
        self.depreciation_cost = non_negative(self.depreciation_cost);
        self.other_expenses = non_negative(self.other_expenses);
        self.apply_vehicle_policy(profile.transport_type);

        Ok(self)
    }
}

/// A session as stored in the database.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    #[serde(flatten)]
    pub draft: SessionDraft,
    pub platform_name: String,
    /// Commission charged at submit time, from the profile fee percent.
    pub platform_fee: f64,
    pub created_at: String,
}

impl Session {
    pub fn metrics(&self) -> DerivedMetrics {
        compute_derived_metrics(&self.draft, None)
    }
}
