use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_profile;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let profile = load_profile(&pool.conn)?;

        let today = date::today();
        let bounds = if *now {
            Some((today, today))
        } else if period.as_deref() == Some("all") {
            None
        } else {
            Some(date::resolve_period(period.as_deref(), today).map_err(AppError::InvalidPeriod)?)
        };

        HistoryLogic::list(&mut pool, bounds, &profile.currency_symbol)?;
    }
    Ok(())
}
