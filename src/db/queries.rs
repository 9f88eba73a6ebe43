use crate::core::store::{EmployeeDirectory, LineStore};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::line::Line;
use crate::models::sheet::{Sheet, SheetStatus};
use rusqlite::{Connection, OptionalExtension, Row, named_params};
use tracing::debug;

/// SQLite-backed store. Borrows a connection (usually the per-request read
/// transaction) and only ever issues SELECTs.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn corrupt(msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::CorruptRow(msg)),
    )
}

pub fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        site: row.get("site")?,
        level: row.get("level")?,
        company: row.get("company")?,
        active: row.get::<_, i64>("active")? != 0,
        created_at: row.get("created_at")?,
    })
}

pub fn map_sheet(row: &Row) -> rusqlite::Result<Sheet> {
    let status_str: String = row.get("sheet_status")?;
    let status = SheetStatus::from_db_str(&status_str)
        .ok_or_else(|| corrupt(format!("invalid sheet_status: {status_str}")))?;

    Ok(Sheet {
        id: row.get("id")?,
        year: row.get("year")?,
        month: row.get("month")?,
        status,
    })
}

pub fn map_line(row: &Row) -> rusqlite::Result<Line> {
    Ok(Line {
        day: row.get("day")?,
        activity: row.get("activity_desc")?,
        commessa: row.get("commessa_cdc")?,
        rip_percent: row.get("rip_percent")?,
        ore_extra: row.get("ore_extra")?,
        spese: row.get("tot_spese")?,
    })
}

impl EmployeeDirectory for SqliteStore<'_> {
    fn find_employee(&self, email: &str) -> AppResult<Option<Employee>> {
        debug!(email, "query employee by email");
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, full_name, email, site, level, company, active, created_at
             FROM employees
             WHERE email = :email
             LIMIT 1",
        )?;
        let row = stmt
            .query_row(named_params! { ":email": email }, map_employee)
            .optional()?;
        Ok(row)
    }
}

impl LineStore for SqliteStore<'_> {
    fn sheet_id(&self, email: &str, year: i32, month: u32) -> AppResult<Option<i64>> {
        debug!(email, year, month, "query sheet id");
        let mut stmt = self.conn.prepare_cached(
            "SELECT rs.id
             FROM ras_sheets rs
             JOIN employees e ON e.id = rs.employee_id
             WHERE e.email = :email
               AND rs.year = :year
               AND rs.month = :month",
        )?;
        let id = stmt
            .query_row(
                named_params! { ":email": email, ":year": year, ":month": month },
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    fn sheets_by_employee(&self, email: &str) -> AppResult<Vec<Sheet>> {
        debug!(email, "query sheets by employee");
        let mut stmt = self.conn.prepare_cached(
            "SELECT rs.id, rs.year, rs.month, rs.sheet_status
             FROM ras_sheets rs
             JOIN employees e ON e.id = rs.employee_id
             WHERE e.email = :email
             ORDER BY rs.year, rs.month",
        )?;
        let rows = stmt.query_map(named_params! { ":email": email }, map_sheet)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn lines(&self, sheet_id: i64) -> AppResult<Vec<Line>> {
        debug!(sheet_id, "query sheet lines");
        let mut stmt = self.conn.prepare_cached(
            "SELECT day,
                    COALESCE(activity_desc, '') AS activity_desc,
                    commessa_cdc,
                    rip_percent,
                    COALESCE(ore_extra, 0.0) AS ore_extra,
                    COALESCE(tot_spese, 0.0) AS tot_spese
             FROM ras_lines
             WHERE sheet_id = :sheet_id
             ORDER BY day, id",
        )?;
        let rows = stmt.query_map(named_params! { ":sheet_id": sheet_id }, map_line)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
