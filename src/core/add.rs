use crate::core::calculator::metrics::{DerivedMetrics, ESTIMATE_NOTE};
use crate::core::calculator::settlement::platform_fee;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_session;
use crate::errors::AppResult;
use crate::models::profile::CourierProfile;
use crate::models::session::SessionDraft;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_profit;
use crate::utils::format_currency;
use crate::utils::formatting::italic;
use crate::utils::time::format_hours;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Preview the draft and, unless `preview_only`, store it.
    /// Returns the id of the new session when one was saved.
    pub fn apply(
        pool: &mut DbPool,
        mut draft: SessionDraft,
        profile: &CourierProfile,
        preview_only: bool,
    ) -> AppResult<Option<i64>> {
        if draft.apply_vehicle_policy(profile.transport_type) {
            warning(format!(
                "Fuel cost ignored: {} is a non-fuel vehicle.",
                profile.transport_type.as_str()
            ));
        }

        let metrics = draft.preview(profile);
        let fee_pct = profile.effective_fee_percent();

        header("Session preview");
        print!("{}", render_preview(&metrics, &profile.currency_symbol));
        if fee_pct > 0.0 {
            println!(
                "Fleet fee ({}%) : {} (charged on save, not in the estimate)",
                fee_pct,
                format_currency(
                    &profile.currency_symbol,
                    platform_fee(draft.gross_earnings, fee_pct)
                )
            );
        }
        println!("{}", italic(ESTIMATE_NOTE));

        if preview_only {
            info("Preview only: session not saved.");
            return Ok(None);
        }

        let finalized = draft.finalize(profile)?;
        let fee = platform_fee(finalized.gross_earnings, fee_pct);
        let id = insert_session(&pool.conn, &finalized, fee)?;

        if let Err(e) = audit(
            &pool.conn,
            "add",
            &format!("session {id}"),
            &format!(
                "{} {}-{} est. profit {:.2}",
                finalized.date, finalized.start_time, finalized.end_time, metrics.net_profit
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success(format!(
            "Session #{} saved for {} ({} → {}).",
            id, finalized.date, finalized.start_time, finalized.end_time
        ));

        Ok(Some(id))
    }
}

/// Plain-text block with the local estimate, one figure per line.
pub fn render_preview(m: &DerivedMetrics, symbol: &str) -> String {
    let money = |v: f64| format_currency(symbol, v);

    let mut out = String::new();
    out.push_str(&format!("Duration       : {}\n", format_hours(m.duration_hours)));
    out.push_str(&format!("Earnings       : {}\n", money(m.total_earnings)));
    out.push_str(&format!("Costs (est.)   : {}\n", money(m.total_costs)));
    out.push_str(&format!(
        "Est. Profit*   : {}\n",
        colorize_profit(&money(m.net_profit), m.net_profit)
    ));
    out.push_str(&format!("Est. /hr       : {}\n", money(m.profit_per_hour)));
    out.push_str(&format!("Est. /km       : {}\n", money(m.profit_per_km)));
    out.push_str(&format!("Est. /order    : {}\n", money(m.profit_per_order)));
    out
}
