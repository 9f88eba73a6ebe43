use crate::cli::commands::with_service;
use crate::cli::output::print_json;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::date::validate_ym_range;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Period {
        email,
        from_ym,
        to_ym,
        hours_per_workday,
    } = &cli.command
    {
        // reject before touching the database
        validate_ym_range(*from_ym, *to_ym)?;

        let hours = hours_per_workday.unwrap_or(cfg.hours_per_workday);
        let summary =
            with_service(cfg, |svc| svc.period_summary(email, *from_ym, *to_ym, hours))?;
        print_json(&summary, cli.pretty)?;
    }
    Ok(())
}
