//! rasreport library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reporting core (store seams, aggregation, period roll-up).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Me { .. } => cli::commands::me::handle(cli, cfg),
        Commands::Month { .. } => cli::commands::month::handle(cli, cfg),
        Commands::Period { .. } => cli::commands::period::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Db { .. } => cli::commands::db::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config once
    let mut cfg = Config::load()?;

    // 3) command-line DB override beats file and environment
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
