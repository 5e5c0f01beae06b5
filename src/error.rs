//! Error types for the payout report pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that abort a report run.
///
/// Problems with a single employee's payout are not represented here; those are
/// recovered inside the generator (see [`crate::payout::PayoutFailure`]).
#[derive(Error, Debug)]
pub enum ReportError {
    /// An input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV tokenizing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Report could not be serialized
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A department total does not fit in the integer range
    #[error("Total {total} overflows for department '{department}'")]
    TotalOverflow {
        department: String,
        total: &'static str,
    },

    /// Requested report name is not registered
    #[error("Report '{name}' is not supported, available: {supported}")]
    UnknownReport { name: String, supported: String },

    /// Requested output format is not registered
    #[error("Format '{name}' is not supported, available: {supported}")]
    UnknownFormat { name: String, supported: String },
}
