//! Deterministic synthetic RAS data for demos and manual testing.

use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceKind;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rusqlite::{Connection, params};
use tracing::info;

const COMPANY: &str = "EXTRARED";
const SITES: [&str; 3] = ["PI", "MI", "RM"];
const LEVELS: [&str; 4] = ["B1", "B2", "C1", "C2"];
const MONTHS: [(i32, u32); 3] = [(2025, 10), (2025, 11), (2025, 12)];
const DAYS_PER_MONTH: u32 = 20;
const ABSENCE_DAY_PROBABILITY: f64 = 0.05;

const ACTIVITIES: [&str; 6] = [
    "Analisi requisiti",
    "Sviluppo",
    "Test",
    "Bugfix",
    "Meeting",
    "Documentazione",
];
const COMMESSE: [&str; 5] = ["EMO-1877", "EMO-1901", "INT-0001", "CUS-2044", "OPS-0100"];
const FASI: [Option<&str>; 4] = [Some("F1"), Some("F2"), Some("F3"), None];

const FIRST_NAMES: [&str; 12] = [
    "Giulia", "Marco", "Francesca", "Luca", "Chiara", "Andrea", "Sara", "Matteo", "Elena",
    "Davide", "Martina", "Paolo",
];
const LAST_NAMES: [&str; 12] = [
    "Rossi", "Bianchi", "Esposito", "Romano", "Colombo", "Ricci", "Marino", "Greco", "Bruno",
    "Gallo", "Conti", "Costa",
];

#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    pub employees: usize,
    pub seed: u64,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            employees: 60,
            seed: 42,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub employees: usize,
    pub sheets: usize,
    pub lines: usize,
}

/// Fill an empty, initialized database with synthetic employees, sheets and
/// lines. Everything runs in one transaction.
pub fn seed(conn: &mut Connection, opts: SeedOptions) -> AppResult<SeedReport> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |r| r.get(0))?;
    if existing > 0 {
        return Err(AppError::InvalidInput(format!(
            "database already holds {existing} employees; seed needs an empty database"
        )));
    }

    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut report = SeedReport::default();
    let tx = conn.transaction()?;

    for i in 0..opts.employees {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let full_name = format!("{first} {last}");
        let email = format!(
            "{}.{}{i}@azienda.it",
            first.to_lowercase(),
            last.to_lowercase()
        );
        let site = SITES[rng.gen_range(0..SITES.len())];
        let level = LEVELS[rng.gen_range(0..LEVELS.len())];

        tx.execute(
            "INSERT INTO employees (full_name, email, site, level, company)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![full_name, email, site, level, COMPANY],
        )?;
        let employee_id = tx.last_insert_rowid();
        report.employees += 1;

        for (year, month) in MONTHS {
            tx.execute(
                "INSERT INTO ras_sheets (employee_id, year, month, sheet_status)
                 VALUES (?1, ?2, ?3, 'draft')",
                params![employee_id, year, month],
            )?;
            let sheet_id = tx.last_insert_rowid();
            report.sheets += 1;

            for day in 1..=DAYS_PER_MONTH {
                report.lines += insert_day(&tx, &mut rng, sheet_id, day)?;
            }
        }
    }

    tx.commit()?;
    info!(?report, seed = opts.seed, "synthetic data generated");
    Ok(report)
}

fn insert_day(conn: &Connection, rng: &mut StdRng, sheet_id: i64, day: u32) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO ras_lines
           (sheet_id, day, stato, loc, activity_desc, commessa_cdc, fase,
            rip_percent, ore_extra, tot_spese, pranzo_flag)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;

    if rng.gen_bool(ABSENCE_DAY_PROBABILITY) {
        let kind = AbsenceKind::ALL[rng.gen_range(0..AbsenceKind::ALL.len())];
        stmt.execute(params![
            sheet_id,
            day,
            "ITA",
            Option::<&str>::None,
            kind.to_db_str(),
            Option::<&str>::None,
            Option::<&str>::None,
            Option::<f64>::None,
            0.0,
            0.0,
            "N",
        ])?;
        return Ok(1);
    }

    let n_lines = rng.gen_range(1..=2);
    let split: &[f64] = match n_lines {
        1 => &[100.0],
        _ if rng.gen_bool(0.5) => &[50.0, 50.0],
        _ => &[60.0, 40.0],
    };

    let mut codes = COMMESSE.to_vec();
    codes.shuffle(rng);

    for (pct, code) in split.iter().zip(codes) {
        let loc = SITES[rng.gen_range(0..SITES.len())];
        let activity = ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())];
        let fase = FASI[rng.gen_range(0..FASI.len())];
        let ore_extra = if rng.gen_bool(0.8) {
            0.0
        } else {
            [0.5, 1.0, 1.5, 2.0][rng.gen_range(0..4)]
        };
        let spese = if rng.gen_bool(0.75) {
            0.0
        } else {
            (rng.gen_range(5.0..40.0_f64) * 100.0).round() / 100.0
        };
        let pranzo = if rng.gen_bool(0.6) { "R" } else { "N" };

        stmt.execute(params![
            sheet_id, day, "ITA", loc, activity, code, fase, pct, ore_extra, spese, pranzo,
        ])?;
    }

    Ok(split.len())
}
