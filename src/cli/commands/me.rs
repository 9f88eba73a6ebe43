use crate::cli::commands::with_service;
use crate::cli::output::print_json;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Me { email } = &cli.command {
        let employee = with_service(cfg, |svc| svc.employee(email))?;
        print_json(&employee, cli.pretty)?;
    }
    Ok(())
}
