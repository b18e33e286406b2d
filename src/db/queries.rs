use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::platform::Platform;
use crate::models::profile::{CourierProfile, CourierType, RentFrequency, TransportType};
use crate::models::session::{Session, SessionDraft};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SESSION_SELECT: &str = "SELECT s.*, p.name AS platform_name
     FROM sessions s
     JOIN platforms p ON p.id = s.platform_id";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Sessions
// ---------------------------

pub fn map_session_row(row: &Row) -> Result<Session> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let start_time: ClockTime = start_str.parse().map_err(conversion_error)?;

    let end_str: String = row.get("end_time")?;
    let end_time: ClockTime = end_str.parse().map_err(conversion_error)?;

    let total_orders: Option<i64> = row.get("total_orders")?;

    Ok(Session {
        id: row.get("id")?,
        draft: SessionDraft {
            date,
            start_time,
            end_time,
            platform_id: Some(row.get("platform_id")?),
            total_orders: total_orders.map(|o| o.max(0) as u32),
            total_distance_km: row.get("total_distance_km")?,
            gross_earnings: row.get("gross_earnings")?,
            tips: row.get("tips")?,
            fuel_cost: row.get("fuel_cost")?,
            depreciation_cost: row.get("depreciation_cost")?,
            other_expenses: row.get("other_expenses")?,
        },
        platform_name: row.get("platform_name")?,
        platform_fee: row.get("platform_fee")?,
        created_at: row.get("created_at")?,
    })
}

/// Persist a finalized draft and return the new session id.
pub fn insert_session(conn: &Connection, draft: &SessionDraft, platform_fee: f64) -> AppResult<i64> {
    let platform_id = draft.platform_id.ok_or(AppError::MissingPlatform)?;

    conn.execute(
        "INSERT INTO sessions (date, start_time, end_time, platform_id, total_orders,
                               total_distance_km, gross_earnings, tips, fuel_cost,
                               depreciation_cost, other_expenses, platform_fee, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            draft.date.format("%Y-%m-%d").to_string(),
            draft.start_time.to_string(),
            draft.end_time.to_string(),
            platform_id,
            draft.total_orders.map(i64::from),
            draft.total_distance_km,
            draft.gross_earnings,
            draft.tips,
            draft.fuel_cost,
            draft.depreciation_cost,
            draft.other_expenses,
            platform_fee,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Sessions between two dates (inclusive), oldest first.
pub fn load_sessions_between(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Session>> {
    let sql = format!(
        "{SESSION_SELECT}
         WHERE s.date BETWEEN ?1 AND ?2
         ORDER BY s.date ASC, s.start_time ASC, s.id ASC"
    );
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map(
        [from.format("%Y-%m-%d").to_string(), to.format("%Y-%m-%d").to_string()],
        map_session_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_sessions(pool: &mut DbPool) -> AppResult<Vec<Session>> {
    let sql = format!("{SESSION_SELECT} ORDER BY s.date ASC, s.start_time ASC, s.id ASC");
    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<Option<Session>> {
    let sql = format!("{SESSION_SELECT} WHERE s.id = ?1");
    let session = conn.query_row(&sql, [id], map_session_row).optional()?;
    Ok(session)
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM sessions WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Platforms
// ---------------------------

fn map_platform_row(row: &Row) -> Result<Platform> {
    Ok(Platform {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_platform(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO platforms (name, created_at) VALUES (?1, ?2)",
        params![name, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_platforms(conn: &Connection) -> AppResult<Vec<Platform>> {
    let mut stmt = conn.prepare("SELECT * FROM platforms ORDER BY name COLLATE NOCASE ASC")?;
    let rows = stmt.query_map([], map_platform_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Look a platform up by numeric id or (case-insensitive) name.
pub fn find_platform(conn: &Connection, key: &str) -> AppResult<Option<Platform>> {
    let key = key.trim();

    if let Ok(id) = key.parse::<i64>() {
        let by_id = conn
            .query_row("SELECT * FROM platforms WHERE id = ?1", [id], map_platform_row)
            .optional()?;
        if by_id.is_some() {
            return Ok(by_id);
        }
    }

    find_platform_by_name(conn, key)
}

pub fn find_platform_by_name(conn: &Connection, name: &str) -> AppResult<Option<Platform>> {
    let platform = conn
        .query_row(
            "SELECT * FROM platforms WHERE name = ?1 COLLATE NOCASE",
            [name.trim()],
            map_platform_row,
        )
        .optional()?;
    Ok(platform)
}

pub fn count_sessions_for_platform(conn: &Connection, platform_id: i64) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM sessions WHERE platform_id = ?1",
        [platform_id],
        |row| row.get(0),
    )?;
    Ok(n)
}

pub fn delete_platform(conn: &Connection, platform_id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM platforms WHERE id = ?1", [platform_id])?;
    Ok(())
}

// ---------------------------
// Courier profile
// ---------------------------

fn map_profile_row(row: &Row) -> Result<CourierProfile> {
    let courier: String = row.get("courier_type")?;
    let courier_type = CourierType::from_code(&courier)
        .ok_or_else(|| conversion_error(AppError::InvalidCourierType(courier.clone())))?;

    let transport: String = row.get("transport_type")?;
    let transport_type = TransportType::from_code(&transport)
        .ok_or_else(|| conversion_error(AppError::InvalidTransport(transport.clone())))?;

    let freq: String = row.get("rent_frequency")?;
    let rent_frequency = RentFrequency::from_code(&freq)
        .ok_or_else(|| conversion_error(AppError::InvalidRentFrequency(freq.clone())))?;

    Ok(CourierProfile {
        courier_type,
        fee_percent: row.get("fee_percent")?,
        transport_type,
        default_fuel_cost_per_km: row.get("default_fuel_cost_per_km")?,
        default_depreciation_rate_per_km: row.get("default_depreciation_rate_per_km")?,
        rent_amount: row.get("rent_amount")?,
        rent_frequency,
        currency_symbol: row.get("currency_symbol")?,
    })
}

/// The stored profile, or the defaults when onboarding never happened.
pub fn load_profile(conn: &Connection) -> AppResult<CourierProfile> {
    let profile = conn
        .query_row("SELECT * FROM profile WHERE id = 1", [], map_profile_row)
        .optional()?;
    Ok(profile.unwrap_or_default())
}

pub fn save_profile(conn: &Connection, profile: &CourierProfile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profile (id, courier_type, fee_percent, transport_type,
                              default_fuel_cost_per_km, default_depreciation_rate_per_km,
                              rent_amount, rent_frequency, currency_symbol, updated_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(id) DO UPDATE SET
             courier_type = excluded.courier_type,
             fee_percent = excluded.fee_percent,
             transport_type = excluded.transport_type,
             default_fuel_cost_per_km = excluded.default_fuel_cost_per_km,
             default_depreciation_rate_per_km = excluded.default_depreciation_rate_per_km,
             rent_amount = excluded.rent_amount,
             rent_frequency = excluded.rent_frequency,
             currency_symbol = excluded.currency_symbol,
             updated_at = excluded.updated_at",
        params![
            profile.courier_type.to_db_str(),
            profile.fee_percent,
            profile.transport_type.as_str(),
            profile.default_fuel_cost_per_km,
            profile.default_depreciation_rate_per_km,
            profile.rent_amount,
            profile.rent_frequency.as_str(),
            profile.currency_symbol,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}
