use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{find_platform, load_profile};
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::session::SessionDraft;
use crate::utils::date;
use crate::utils::number::{parse_count, parse_optional_amount};

/// Log a work session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        platform,
        orders,
        km,
        gross,
        tips,
        fuel,
        depreciation,
        other,
        preview,
    } = cmd
    {
        //
        // 1. Date (default = today)
        //
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Times: any accepted grammar, normalized to HH:MM
        //
        let start_time: ClockTime = start.as_deref().unwrap_or(&cfg.default_start_time).parse()?;
        let end_time: ClockTime = end.as_deref().unwrap_or(&cfg.default_end_time).parse()?;

        //
        // 3. Open DB and load courier defaults once
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = load_profile(&pool.conn)?;

        let mut draft = SessionDraft::new(d, start_time, end_time);

        //
        // 4. Platform (required on save, optional for --preview)
        //
        if let Some(key) = platform {
            let p = find_platform(&pool.conn, key)?
                .ok_or_else(|| AppError::PlatformNotFound(key.to_string()))?;
            draft.platform_id = Some(p.id);
        }

        //
        // 5. Numbers: strict, a typo must not silently become 0
        //
        if let Some(o) = orders {
            draft.total_orders = Some(parse_count("orders", o)?);
        }
        draft.total_distance_km = parse_optional_amount("km", km.as_ref())?.unwrap_or(0.0);
        draft.gross_earnings = parse_optional_amount("gross", gross.as_ref())?.unwrap_or(0.0);
        draft.tips = parse_optional_amount("tips", tips.as_ref())?.unwrap_or(0.0);
        draft.fuel_cost = parse_optional_amount("fuel", fuel.as_ref())?.unwrap_or(0.0);
        draft.other_expenses = parse_optional_amount("other", other.as_ref())?.unwrap_or(0.0);

        match parse_optional_amount("depreciation", depreciation.as_ref())? {
            Some(v) => draft.depreciation_cost = v,
            None => draft.apply_profile_depreciation(&profile),
        }

        //
        // 6. Execute logic
        //
        AddLogic::apply(&mut pool, draft, &profile, *preview)?;
    }

    Ok(())
}
