// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_all_sessions, load_sessions_between};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::SessionExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

/// High-level export of the session history.
pub struct ExportLogic;

impl ExportLogic {
    /// - `range`: `None` / `"all"` for everything, otherwise `YYYY`,
    ///   `YYYY-MM`, `YYYY-MM-DD` or a `START:END` pair of those.
    ///
    /// Returns the number of exported sessions.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let sessions = match range {
            None => load_all_sessions(pool)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_all_sessions(pool)?,
            Some(r) => {
                let (from, to) = resolve_period(Some(r), crate::utils::date::today())
                    .map_err(AppError::InvalidPeriod)?;
                load_sessions_between(pool, &from, &to)?
            }
        };

        if sessions.is_empty() {
            warning("No sessions found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<SessionExport> = sessions.iter().map(SessionExport::from).collect();

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), &path);
        Ok(rows.len())
    }
}
