//! Command-line arguments and their translation into a pipeline.

use crate::error::Result;
use crate::pipeline::{OutputFormat, ReportCore, ReportKind};
use crate::rate::RateCandidates;
use crate::record::CsvReportReader;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Build a per-department payout report from employee CSV files
#[derive(Parser, Debug)]
#[command(name = "payout-report")]
#[command(about = "Build a per-department payout report from employee CSV files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV files to read, in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report to generate (supported: payout)
    #[arg(long, value_name = "NAME")]
    pub report: String,

    /// Output format (supported: json, console)
    #[arg(long, value_name = "NAME", default_value = "json")]
    pub format: String,

    /// Extra column name to accept as the pay rate, after rate, hourly_rate and salary
    #[arg(long = "rate-field", value_name = "NAME")]
    pub rate_fields: Vec<String>,

    /// Increase log verbosity (-v for info, -vv for debug) when RUST_LOG is unset
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Validates the report and format names and wires up the pipeline.
    pub fn build_pipeline(&self) -> Result<ReportCore> {
        let report: ReportKind = self.report.parse()?;
        let format: OutputFormat = self.format.parse()?;
        let candidates = RateCandidates::default().with_extra(self.rate_fields.iter().cloned());

        Ok(ReportCore::new(
            Box::new(CsvReportReader::new(self.files.iter().cloned())),
            report.generator(candidates),
            format.renderer(),
        ))
    }
}
