use clap::{Parser, Subcommand};

/// Command-line interface definition for rasreport
/// Read-only reports over a RAS timesheet database
#[derive(Parser)]
#[command(
    name = "rasreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read-only monthly and period reports over a RAS timesheet database",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Pretty-print JSON output
    #[arg(global = true, long = "pretty")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an employee profile
    Me {
        #[arg(long, help = "Employee email")]
        email: String,
    },

    /// Monthly summary for one employee
    Month {
        #[arg(long, help = "Employee email")]
        email: String,

        #[arg(long, help = "Year (e.g. 2025)")]
        year: i32,

        #[arg(long, help = "Month (1..12)")]
        month: u32,

        /// Hours per worked day used for the ordinary hours estimate
        #[arg(
            long = "hours-per-workday",
            value_parser = clap::value_parser!(u32).range(0..=24),
            help = "Hours per workday, 0..24 (default from config, 8)"
        )]
        hours_per_workday: Option<u32>,
    },

    /// Multi-month summary for one employee
    Period {
        #[arg(long, help = "Employee email")]
        email: String,

        #[arg(long = "from", value_name = "YYYYMM", help = "First month, e.g. 202510")]
        from_ym: i64,

        #[arg(long = "to", value_name = "YYYYMM", help = "Last month, e.g. 202512")]
        to_ym: i64,

        /// Hours per worked day used for the ordinary hours estimate
        #[arg(
            long = "hours-per-workday",
            value_parser = clap::value_parser!(u32).range(0..=24),
            help = "Hours per workday, 0..24 (default from config, 8)"
        )]
        hours_per_workday: Option<u32>,
    },

    /// Show the configuration file
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database
    Db {
        #[arg(long = "init", help = "Create the RAS schema")]
        init: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "seed", help = "Fill an empty database with synthetic data")]
        seed: bool,

        #[arg(long = "employees", requires = "seed", help = "Employees to generate (default 60)")]
        employees: Option<usize>,

        #[arg(long = "rng-seed", requires = "seed", help = "Random seed (default 42)")]
        rng_seed: Option<u64>,
    },
}
