use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::SummaryPeriod;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, date: day } = cmd {
        let code = period.as_deref().unwrap_or(&cfg.default_period);
        let period =
            SummaryPeriod::from_code(code).ok_or_else(|| AppError::InvalidPeriod(code.to_string()))?;

        let reference = match day {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        SummaryLogic::run(&mut pool, period, reference, cfg.recent_sessions)?;
    }

    Ok(())
}
