use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::{init_db, is_initialized};
use crate::db::pool::DbPool;
use crate::db::seed::{self, SeedOptions};
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        init,
        info: show_info,
        check,
        seed: do_seed,
        employees,
        rng_seed,
    } = &cli.command
    {
        if !(*init || *show_info || *check || *do_seed) {
            warning("Nothing to do: use --init, --info, --check or --seed");
            return Ok(());
        }

        //
        // 1) INIT
        //
        if *init {
            if let Some(dir) = Path::new(&cfg.database).parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }
            let pool = DbPool::new(&cfg.database)?;
            if is_initialized(&pool.conn)? {
                info(format!("Schema already present: {}", cfg.database));
            } else {
                init_db(&pool.conn)?;
                success(format!("Database initialized: {}", cfg.database));
            }
        }

        //
        // 2) SEED
        //
        if *do_seed {
            let mut pool = DbPool::new(&cfg.database)?;
            if !is_initialized(&pool.conn)? {
                return Err(AppError::InvalidInput(
                    "database not initialized: run `rasreport db --init` first".to_string(),
                ));
            }
            let defaults = SeedOptions::default();
            let opts = SeedOptions {
                employees: employees.unwrap_or(defaults.employees),
                seed: rng_seed.unwrap_or(defaults.seed),
            };
            let report = pool.with_conn(|conn| seed::seed(conn, opts))?;
            success(format!(
                "Generated {} employees, {} sheets, {} lines (seed {})",
                report.employees, report.sheets, report.lines, opts.seed
            ));
        }

        //
        // 3) INFO
        //
        if *show_info {
            let mut pool = DbPool::open_read_only(&cfg.database)?;
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 4) CHECK
        //
        if *check {
            let pool = DbPool::open_read_only(&cfg.database)?;
            let integrity: String =
                pool.conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                warning(format!("Integrity check reported: {integrity}"));
            }
        }
    }
    Ok(())
}
