use crate::core::calculator::summary::{PeriodSummary, SummaryPeriod, build_summary};
use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, load_sessions_between};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_profit;
use crate::utils::format_currency;
use crate::utils::formatting::{bold, format_km};
use crate::utils::table::{Column, Table};
use crate::utils::time::hours2readable;
use chrono::NaiveDate;

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn run(
        pool: &mut DbPool,
        period: SummaryPeriod,
        reference: NaiveDate,
        recent_limit: usize,
    ) -> AppResult<PeriodSummary> {
        let profile = load_profile(&pool.conn)?;
        let (from, to) = period.bounds(reference);
        let sessions = load_sessions_between(pool, &from, &to)?;

        let summary = build_summary(&sessions, &profile, from, to, recent_limit);

        header(format!("Dashboard: {} ({} → {})", period.as_str(), from, to));
        if summary.session_count == 0 {
            info("No sessions in this period. Start adding sessions with `profitrider add`.");
            return Ok(summary);
        }

        print!("{}", render_summary(&summary, &profile.currency_symbol));
        Ok(summary)
    }
}

pub fn render_summary(s: &PeriodSummary, symbol: &str) -> String {
    let money = |v: f64| format_currency(symbol, v);
    let mut out = String::new();

    out.push_str(&format!(
        "{}     : {}\n",
        bold("Net Profit"),
        colorize_profit(&money(s.total_net_profit), s.total_net_profit)
    ));
    out.push_str(&format!("Total Earnings : {}\n", money(s.total_earnings)));
    out.push_str(&format!(
        "Total Costs    : {} (entered {} + fleet fees {} + rent {})\n",
        money(s.total_costs),
        money(s.estimated_costs),
        money(s.platform_fees),
        money(s.rent)
    ));
    out.push_str(&format!("Profit / Hour  : {}\n", money(s.avg_profit_per_hour)));
    out.push_str(&format!("Profit / Km    : {}\n", money(s.profit_per_km)));
    out.push_str(&format!("Profit / Order : {}\n", money(s.profit_per_order)));
    out.push_str(&format!(
        "Sessions: {} | Time: {} | Distance: {} | Orders: {}\n",
        s.session_count,
        hours2readable(s.total_hours),
        format_km(s.total_distance_km),
        s.total_orders
    ));

    out.push_str("\nEarnings vs costs per day:\n");
    let mut chart = Table::new(vec![
        Column::left("Date", 10),
        Column::right("Earnings", 10),
        Column::right("Costs", 10),
        Column::right("Profit", 10),
    ]);
    for p in &s.chart {
        chart.add_row(vec![
            p.date.to_string(),
            money(p.earnings),
            money(p.costs),
            money(p.profit),
        ]);
    }
    out.push_str(&chart.render());

    if !s.recent.is_empty() {
        out.push_str("\nRecent sessions:\n");
        for r in &s.recent {
            let m = r.metrics();
            out.push_str(&format!(
                "  #{} {} {}-{} {:<14} {}\n",
                r.id,
                r.draft.date,
                r.draft.start_time,
                r.draft.end_time,
                r.platform_name,
                money(m.net_profit)
            ));
        }
    }

    out
}
