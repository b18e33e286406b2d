use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration bookkeeping lives there,
/// so it has to be created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once, recording `version` in the log table.
fn apply_once(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<bool> {
    if is_applied(conn, version)? {
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(true)
}

const CREATE_PLATFORMS: &str = r#"
    CREATE TABLE IF NOT EXISTS platforms (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL UNIQUE COLLATE NOCASE,
        created_at  TEXT NOT NULL
    );
"#;

const CREATE_PROFILE: &str = r#"
    CREATE TABLE IF NOT EXISTS profile (
        id                                INTEGER PRIMARY KEY CHECK (id = 1),
        courier_type                      TEXT NOT NULL DEFAULT 'SOLOPRENEUR'
                                          CHECK (courier_type IN ('SOLOPRENEUR','FLEET_COMPANY')),
        fee_percent                       REAL NOT NULL DEFAULT 0,
        transport_type                    TEXT NOT NULL DEFAULT 'car'
                                          CHECK (transport_type IN ('bicycle','motorcycle','car','scooter')),
        default_fuel_cost_per_km          REAL NOT NULL DEFAULT 0,
        default_depreciation_rate_per_km  REAL NOT NULL DEFAULT 0,
        rent_amount                       REAL NOT NULL DEFAULT 0,
        rent_frequency                    TEXT NOT NULL DEFAULT 'daily'
                                          CHECK (rent_frequency IN ('daily','weekly','monthly')),
        currency_symbol                   TEXT NOT NULL DEFAULT '$',
        updated_at                        TEXT NOT NULL
    );
"#;

const CREATE_SESSIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id                 INTEGER PRIMARY KEY AUTOINCREMENT,
        date               TEXT NOT NULL,
        start_time         TEXT NOT NULL,
        end_time           TEXT NOT NULL,
        platform_id        INTEGER NOT NULL REFERENCES platforms(id),
        total_orders       INTEGER,
        total_distance_km  REAL NOT NULL DEFAULT 0,
        gross_earnings     REAL NOT NULL DEFAULT 0,
        tips               REAL NOT NULL DEFAULT 0,
        fuel_cost          REAL NOT NULL DEFAULT 0,
        depreciation_cost  REAL NOT NULL DEFAULT 0,
        other_expenses     REAL NOT NULL DEFAULT 0,
        platform_fee       REAL NOT NULL DEFAULT 0,
        created_at         TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_sessions_date_start ON sessions(date, start_time);
    CREATE INDEX IF NOT EXISTS idx_sessions_platform ON sessions(platform_id);
"#;

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() and `db --migrate`. Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let steps: [(&str, &str, &str); 3] = [
        (
            "20260301_0001_create_platforms",
            "created platforms table",
            CREATE_PLATFORMS,
        ),
        (
            "20260301_0002_create_profile",
            "created courier profile table",
            CREATE_PROFILE,
        ),
        (
            "20260301_0003_create_sessions",
            "created sessions table",
            CREATE_SESSIONS,
        ),
    ];

    let mut applied = 0;
    for (version, message, sql) in steps {
        if apply_once(conn, version, message, sql)? {
            applied += 1;
        }
    }

    Ok(applied)
}
