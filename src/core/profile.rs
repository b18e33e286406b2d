use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, save_profile};
use crate::errors::{AppError, AppResult};
use crate::models::profile::{CourierProfile, CourierType, RentFrequency, TransportType};
use crate::ui::messages::{header, success, warning};
use crate::utils::format_currency;

/// Field changes requested on the command line; `None` keeps the value.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub courier_type: Option<String>,
    pub fee_percent: Option<f64>,
    pub transport_type: Option<String>,
    pub fuel_cost_per_km: Option<f64>,
    pub depreciation_rate_per_km: Option<f64>,
    pub rent_amount: Option<f64>,
    pub rent_frequency: Option<String>,
    pub currency_symbol: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.courier_type.is_none()
            && self.fee_percent.is_none()
            && self.transport_type.is_none()
            && self.fuel_cost_per_km.is_none()
            && self.depreciation_rate_per_km.is_none()
            && self.rent_amount.is_none()
            && self.rent_frequency.is_none()
            && self.currency_symbol.is_none()
    }

    /// Apply the changes on top of `current`.
    ///
    /// An independent courier never keeps a fee: switching to solopreneur
    /// resets it to 0, and a fee given for a solopreneur is dropped.
    pub fn apply_to(&self, current: &CourierProfile) -> AppResult<CourierProfile> {
        let mut p = current.clone();

        if let Some(code) = &self.courier_type {
            p.courier_type =
                CourierType::from_code(code).ok_or_else(|| AppError::InvalidCourierType(code.clone()))?;
        }

        if let Some(fee) = self.fee_percent {
            if !fee.is_finite() || !(0.0..=100.0).contains(&fee) {
                return Err(AppError::InvalidFeePercent(fee));
            }
            p.fee_percent = fee;
        }

        if p.courier_type == CourierType::Solopreneur {
            p.fee_percent = 0.0;
        }

        if let Some(code) = &self.transport_type {
            p.transport_type =
                TransportType::from_code(code).ok_or_else(|| AppError::InvalidTransport(code.clone()))?;
        }

        if let Some(v) = self.fuel_cost_per_km {
            p.default_fuel_cost_per_km = v;
        }
        if let Some(v) = self.depreciation_rate_per_km {
            p.default_depreciation_rate_per_km = v;
        }
        if let Some(v) = self.rent_amount {
            p.rent_amount = v;
        }

        if let Some(code) = &self.rent_frequency {
            p.rent_frequency = RentFrequency::from_code(code)
                .ok_or_else(|| AppError::InvalidRentFrequency(code.clone()))?;
        }

        if let Some(sym) = &self.currency_symbol {
            let sym = sym.trim();
            if !sym.is_empty() {
                p.currency_symbol = sym.to_string();
            }
        }

        Ok(p)
    }
}

pub struct ProfileLogic;

impl ProfileLogic {
    pub fn update(pool: &mut DbPool, update: &ProfileUpdate) -> AppResult<CourierProfile> {
        let current = load_profile(&pool.conn)?;
        let next = update.apply_to(&current)?;

        if update.fee_percent.is_some() && next.courier_type == CourierType::Solopreneur {
            warning("Fee ignored: independent couriers pay no fleet fee.");
        }

        save_profile(&pool.conn, &next)?;

        let msg = match next.courier_type {
            CourierType::Solopreneur => "Profile updated. Fleet fees disabled.".to_string(),
            CourierType::FleetCompany => {
                format!("Profile updated. Fleet fee set to {}%.", next.fee_percent)
            }
        };

        if let Err(e) = audit(&pool.conn, "profile", "profile", &msg) {
            warning(format!("Failed to write internal log: {}", e));
        }
        success(msg);

        Ok(next)
    }

    pub fn print(profile: &CourierProfile) {
        header("Courier profile");
        print!("{}", render_profile(profile));
    }
}

pub fn render_profile(p: &CourierProfile) -> String {
    let sym = &p.currency_symbol;
    let mut out = String::new();
    out.push_str(&format!("Courier type       : {}\n", p.courier_type.label()));
    out.push_str(&format!("Fleet fee          : {}%\n", p.effective_fee_percent()));
    out.push_str(&format!("Transport          : {}\n", p.transport_type.as_str()));
    out.push_str(&format!(
        "Fuel cost / km     : {}\n",
        format_currency(sym, p.default_fuel_cost_per_km)
    ));
    out.push_str(&format!(
        "Depreciation / km  : {}\n",
        format_currency(sym, p.default_depreciation_rate_per_km)
    ));
    out.push_str(&format!(
        "Rent               : {} {}\n",
        format_currency(sym, p.rent_amount),
        p.rent_frequency.as_str()
    ));
    out.push_str(&format!("Currency           : {}\n", sym));
    out
}
