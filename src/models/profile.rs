use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportType {
    Bicycle,
    Motorcycle,
    Car,
    Scooter,
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Bicycle => "bicycle",
            TransportType::Motorcycle => "motorcycle",
            TransportType::Car => "car",
            TransportType::Scooter => "scooter",
        }
    }

    /// Case-insensitive lookup, used for CLI input and DB rows alike.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "bicycle" | "bike" => Some(TransportType::Bicycle),
            "motorcycle" | "moto" => Some(TransportType::Motorcycle),
            "car" => Some(TransportType::Car),
            "scooter" => Some(TransportType::Scooter),
            _ => None,
        }
    }

    /// Bicycles and (electric) scooters never carry a fuel cost.
    pub fn is_fuel_free(&self) -> bool {
        matches!(self, TransportType::Bicycle | TransportType::Scooter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourierType {
    /// Independent courier, no commission.
    Solopreneur,
    /// Works under a fleet/company taking `fee_percent` of gross earnings.
    FleetCompany,
}

impl CourierType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CourierType::Solopreneur => "SOLOPRENEUR",
            CourierType::FleetCompany => "FLEET_COMPANY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "solopreneur" | "independent" | "solo" => Some(CourierType::Solopreneur),
            "fleet_company" | "fleet" | "company" => Some(CourierType::FleetCompany),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourierType::Solopreneur => "Solopreneur",
            CourierType::FleetCompany => "Fleet / Company",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl RentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentFrequency::Daily => "daily",
            RentFrequency::Weekly => "weekly",
            RentFrequency::Monthly => "monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "daily" => Some(RentFrequency::Daily),
            "weekly" => Some(RentFrequency::Weekly),
            "monthly" => Some(RentFrequency::Monthly),
            _ => None,
        }
    }

    /// Number of days one rent payment covers.
    pub fn days(&self) -> f64 {
        match self {
            RentFrequency::Daily => 1.0,
            RentFrequency::Weekly => 7.0,
            RentFrequency::Monthly => 30.0,
        }
    }
}

/// Courier defaults used to seed and gate session drafts.
///
/// Stored as a single row in the `profile` table; a missing row resolves to
/// `CourierProfile::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierProfile {
    pub courier_type: CourierType,
    pub fee_percent: f64,
    pub transport_type: TransportType,
    pub default_fuel_cost_per_km: f64,
    pub default_depreciation_rate_per_km: f64,
    pub rent_amount: f64,
    pub rent_frequency: RentFrequency,
    pub currency_symbol: String,
}

impl Default for CourierProfile {
    fn default() -> Self {
        Self {
            courier_type: CourierType::Solopreneur,
            fee_percent: 0.0,
            transport_type: TransportType::Car,
            default_fuel_cost_per_km: 0.0,
            default_depreciation_rate_per_km: 0.0,
            rent_amount: 0.0,
            rent_frequency: RentFrequency::Daily,
            currency_symbol: "$".to_string(),
        }
    }
}

impl CourierProfile {
    /// Commission actually applied to gross earnings: always 0 for
    /// independent couriers, clamped to 0..=100 otherwise.
    pub fn effective_fee_percent(&self) -> f64 {
        match self.courier_type {
            CourierType::Solopreneur => 0.0,
            CourierType::FleetCompany if self.fee_percent.is_finite() => {
                self.fee_percent.clamp(0.0, 100.0)
            }
            CourierType::FleetCompany => 0.0,
        }
    }

    pub fn is_fuel_free(&self) -> bool {
        self.transport_type.is_fuel_free()
    }
}
