use crate::db::pool::DbPool;
use crate::db::queries::{load_all_sessions, load_sessions_between};
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::format_currency;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct HistoryLogic;

impl HistoryLogic {
    /// Print the sessions inside `bounds` (all of them when `None`).
    pub fn list(
        pool: &mut DbPool,
        bounds: Option<(NaiveDate, NaiveDate)>,
        symbol: &str,
    ) -> AppResult<()> {
        let sessions = match bounds {
            Some((from, to)) => load_sessions_between(pool, &from, &to)?,
            None => load_all_sessions(pool)?,
        };

        if sessions.is_empty() {
            match bounds {
                Some((from, to)) => info(format!("No sessions between {} and {}.", from, to)),
                None => info("No sessions logged yet."),
            }
            return Ok(());
        }

        print!("{}", render_history(&sessions, symbol));

        let n = sessions.len();
        println!("\n{} session{}", n, if n == 1 { "" } else { "s" });
        Ok(())
    }
}

pub fn render_history(sessions: &[Session], symbol: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID", 4),
        Column::left("Date", 10),
        Column::left("Start", 5),
        Column::left("End", 5),
        Column::right("Hours", 5),
        Column::left("Platform", 14),
        Column::right("Orders", 6),
        Column::right("Km", 7),
        Column::right("Earnings", 10),
        Column::right("Costs", 10),
        Column::right("Est.Profit", 10),
    ]);

    for s in sessions {
        let m = s.metrics();
        table.add_row(vec![
            s.id.to_string(),
            s.draft.date.to_string(),
            s.draft.start_time.to_string(),
            s.draft.end_time.to_string(),
            format!("{:.1}", m.duration_hours),
            s.platform_name.clone(),
            s.draft
                .total_orders
                .map(|o| o.to_string())
                .unwrap_or_else(|| "-".into()),
            format!("{:.1}", s.draft.total_distance_km),
            format_currency(symbol, m.total_earnings),
            format_currency(symbol, m.total_costs),
            format_currency(symbol, m.net_profit),
        ]);
    }

    table.render()
}
