use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session, load_session};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one session and return what was deleted.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Session> {
        let session = load_session(&pool.conn, id)?.ok_or(AppError::SessionNotFound(id))?;

        delete_session(&pool.conn, id)?;

        if let Err(e) = audit(
            &pool.conn,
            "del",
            &format!("session {id}"),
            &format!(
                "{} {}-{} on {}",
                session.draft.date,
                session.draft.start_time,
                session.draft.end_time,
                session.platform_name
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(session)
    }
}
