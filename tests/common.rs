#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::path::PathBuf;
use tempfile::TempDir;

pub const EMAIL: &str = "giulia.rossi0@azienda.it";

pub fn ras() -> Command {
    let mut cmd = cargo_bin_cmd!("rasreport");
    // keep the developer's own config and env out of the tests
    cmd.env("HOME", std::env::temp_dir())
        .env_remove("RAS_DATABASE")
        .env_remove("RUST_LOG");
    cmd
}

/// Fresh initialized DB inside a temp dir. Keep the TempDir alive for the
/// duration of the test.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path: PathBuf = dir.path().join("ras.sqlite");
    let db_path = path.to_string_lossy().to_string();

    let conn = Connection::open(&db_path).expect("open db");
    rasreport::db::initialize::init_db(&conn).expect("init db");
    (dir, db_path)
}

pub fn insert_employee(conn: &Connection, email: &str, full_name: &str) -> i64 {
    conn.execute(
        "INSERT INTO employees (full_name, email, site, level, company, active, created_at)
         VALUES (?1, ?2, 'PI', 'B2', 'EXTRARED', 1, '2025-01-10T08:00:00Z')",
        params![full_name, email],
    )
    .expect("insert employee");
    conn.last_insert_rowid()
}

pub fn insert_sheet(conn: &Connection, employee_id: i64, year: i32, month: u32, status: &str) -> i64 {
    conn.execute(
        "INSERT INTO ras_sheets (employee_id, year, month, sheet_status)
         VALUES (?1, ?2, ?3, ?4)",
        params![employee_id, year, month, status],
    )
    .expect("insert sheet");
    conn.last_insert_rowid()
}

pub fn insert_work(conn: &Connection, sheet_id: i64, day: u32, commessa: &str, pct: f64) {
    conn.execute(
        "INSERT INTO ras_lines (sheet_id, day, activity_desc, commessa_cdc, rip_percent)
         VALUES (?1, ?2, 'Sviluppo', ?3, ?4)",
        params![sheet_id, day, commessa, pct],
    )
    .expect("insert work line");
}

pub fn insert_absence(conn: &Connection, sheet_id: i64, day: u32, kind: &str) {
    conn.execute(
        "INSERT INTO ras_lines (sheet_id, day, activity_desc) VALUES (?1, ?2, ?3)",
        params![sheet_id, day, kind],
    )
    .expect("insert absence line");
}

pub fn insert_extra(conn: &Connection, sheet_id: i64, day: u32, ore_extra: f64, spese: f64) {
    conn.execute(
        "INSERT INTO ras_lines (sheet_id, day, activity_desc, commessa_cdc, rip_percent, ore_extra, tot_spese)
         VALUES (?1, ?2, 'Meeting', 'INT-0001', 0, ?3, ?4)",
        params![sheet_id, day, ore_extra, spese],
    )
    .expect("insert extra line");
}

/// Employee with sheets for 2025-10 (approved), 2025-11 (submitted) and
/// 2025-12 (draft, no lines).
pub fn init_db_with_data(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    let emp = insert_employee(&conn, EMAIL, "Giulia Rossi");

    let oct = insert_sheet(&conn, emp, 2025, 10, "approved");
    insert_work(&conn, oct, 1, "EMO-1877", 60.0);
    insert_work(&conn, oct, 1, "EMO-1901", 40.0);
    insert_work(&conn, oct, 2, "EMO-1877", 100.0);
    insert_absence(&conn, oct, 3, "FERIE");
    insert_extra(&conn, oct, 2, 1.5, 12.5);

    let nov = insert_sheet(&conn, emp, 2025, 11, "submitted");
    insert_work(&conn, nov, 5, "EMO-1877", 100.0);
    insert_absence(&conn, nov, 5, "FERIE");
    insert_absence(&conn, nov, 6, "MALATTIA");

    insert_sheet(&conn, emp, 2025, 12, "draft");
}

pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
