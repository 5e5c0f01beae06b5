//! Payout Report CLI
//!
//! Reads one or more employee CSV files and prints a per-department payout
//! report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data1.csv data2.csv --report payout --format console
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use payout_report::{Cli, Result};
use std::io;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            eprintln!();
            Cli::command().print_help().ok();
            process::exit(1);
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level().as_str()))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let core = cli.build_pipeline()?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    core.run(handle)
}
