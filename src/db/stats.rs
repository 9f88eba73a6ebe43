use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts and covered period of a RAS database.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub employees: i64,
    pub sheets: i64,
    pub lines: i64,
    pub first_ym: Option<i64>,
    pub last_ym: Option<i64>,
}

pub fn collect_stats(pool: &mut DbPool) -> AppResult<DbStats> {
    let tx = pool.read_tx()?;

    let count = |table: &str| -> rusqlite::Result<i64> {
        tx.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
    };
    let employees = count("employees")?;
    let sheets = count("ras_sheets")?;
    let lines = count("ras_lines")?;

    let (first_ym, last_ym): (Option<i64>, Option<i64>) = tx
        .query_row(
            "SELECT MIN(year * 100 + month), MAX(year * 100 + month) FROM ras_sheets",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    Ok(DbStats {
        employees,
        sheets,
        lines,
        first_ym,
        last_ym,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTS
    //
    let stats = collect_stats(pool)?;
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN, RESET, GREEN, stats.employees, RESET
    );
    println!("{}• Sheets:{} {}{}{}", CYAN, RESET, GREEN, stats.sheets, RESET);
    println!("{}• Lines:{} {}{}{}", CYAN, RESET, GREEN, stats.lines, RESET);

    //
    // 3) PERIOD
    //
    let fmt_ym = |ym: Option<i64>| {
        ym.map(|v| format!("{}-{:02}", v / 100, v % 100))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };
    println!("{}• Period:{}", CYAN, RESET);
    println!("    from: {}", fmt_ym(stats.first_ym));
    println!("    to:   {}", fmt_ym(stats.last_ym));

    //
    // 4) AVERAGE LINES/SHEET
    //
    if stats.sheets > 0 {
        let avg = stats.lines as f64 / stats.sheets as f64;
        println!("{}• Average lines/sheet:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
