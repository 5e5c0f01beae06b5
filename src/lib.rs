//! # Payout Report
//!
//! Reads employee records from CSV files with differing column layouts and
//! builds a per-department payout report.
//!
//! ## Design Principles
//!
//! - **Open records**: each CSV header defines the fields of its rows; no fixed schema
//! - **Ordered rate lookup**: the pay rate comes from the first of `rate`,
//!   `hourly_rate`, `salary` a record has
//! - **Local recovery**: a record whose payout cannot be computed is paid `$0`
//!   and the run continues
//! - **Pluggable stages**: reader, generator and renderer are traits wired
//!   together by [`ReportCore`]
//!
//! ## Example
//!
//! ```no_run
//! use payout_report::{CsvReportReader, JsonReportRenderer, PayoutReportGenerator, ReportCore};
//!
//! let core = ReportCore::new(
//!     Box::new(CsvReportReader::new(["data1.csv", "data2.csv"])),
//!     Box::new(PayoutReportGenerator::default()),
//!     Box::new(JsonReportRenderer),
//! );
//! core.run(std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod money;
pub mod payout;
pub mod pipeline;
pub mod rate;
pub mod record;
pub mod render;
pub mod report;

pub use cli::Cli;
pub use error::{ReportError, Result};
pub use money::Dollars;
pub use payout::{compute_payout, PayoutFailure, PayoutReportGenerator, ReportGenerator};
pub use pipeline::{OutputFormat, ReportCore, ReportKind};
pub use rate::{resolve_rate, RateCandidates};
pub use record::{CsvReportReader, EmployeeRecord, RecordStore, ReportReader};
pub use render::{ConsoleReportRenderer, JsonReportRenderer, ReportRenderer};
pub use report::{DepartmentAggregate, Report, ReportEntry};
