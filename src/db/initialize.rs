use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name   TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    site        TEXT,
    level       TEXT,
    company     TEXT,
    active      INTEGER NOT NULL DEFAULT 1,
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE TABLE IF NOT EXISTS ras_sheets (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id   INTEGER NOT NULL REFERENCES employees(id),
    year          INTEGER NOT NULL,
    month         INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
    sheet_status  TEXT NOT NULL DEFAULT 'draft'
                  CHECK(sheet_status IN ('draft','submitted','approved')),
    submitted_at  TEXT,
    approved_at   TEXT,
    UNIQUE(employee_id, year, month)
);

CREATE TABLE IF NOT EXISTS ras_lines (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    sheet_id       INTEGER NOT NULL REFERENCES ras_sheets(id),
    day            INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
    stato          TEXT,
    loc            TEXT,
    activity_desc  TEXT NOT NULL DEFAULT '',
    commessa_cdc   TEXT,
    fase           TEXT,
    rip_percent    REAL,
    ore_extra      REAL NOT NULL DEFAULT 0 CHECK(ore_extra >= 0),
    tot_spese      REAL NOT NULL DEFAULT 0 CHECK(tot_spese >= 0),
    pranzo_flag    TEXT
);

CREATE INDEX IF NOT EXISTS idx_ras_lines_sheet_day ON ras_lines(sheet_id, day);
CREATE INDEX IF NOT EXISTS idx_ras_sheets_employee ON ras_sheets(employee_id, year, month);
"#;

/// Create the RAS schema. Safe to run on an already initialized database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// True when the `employees` table exists.
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='employees'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
