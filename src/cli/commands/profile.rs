use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::{ProfileLogic, ProfileUpdate};
use crate::db::pool::DbPool;
use crate::db::queries::load_profile;
use crate::errors::{AppError, AppResult};
use crate::utils::number::parse_optional_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        courier_type,
        fee,
        transport,
        fuel_rate,
        depreciation_rate,
        rent,
        rent_frequency,
        currency,
    } = cmd
    {
        let fee_percent = match fee {
            Some(raw) => Some(raw.trim().parse::<f64>().map_err(|_| {
                AppError::InvalidNumber {
                    field: "fee".into(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let update = ProfileUpdate {
            courier_type: courier_type.clone(),
            fee_percent,
            transport_type: transport.clone(),
            fuel_cost_per_km: parse_optional_amount("fuel-rate", fuel_rate.as_ref())?,
            depreciation_rate_per_km: parse_optional_amount(
                "depreciation-rate",
                depreciation_rate.as_ref(),
            )?,
            rent_amount: parse_optional_amount("rent", rent.as_ref())?,
            rent_frequency: rent_frequency.clone(),
            currency_symbol: currency.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let profile = if update.is_empty() {
            load_profile(&pool.conn)?
        } else {
            ProfileLogic::update(&mut pool, &update)?
        };

        ProfileLogic::print(&profile);
    }

    Ok(())
}
