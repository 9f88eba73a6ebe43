use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command {
        if *print_config {
            println!("{}", cfg.to_yaml()?);
        } else {
            info(format!(
                "Configuration file: {}",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
