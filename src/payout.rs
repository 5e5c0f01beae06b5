//! Payout report generation.
//!
//! For every employee the generator resolves the pay-rate field, multiplies it
//! by `hours_worked`, and writes the result back onto the record as `payout`.
//! Records whose payout cannot be computed get `$0` and are logged; they never
//! abort the run. Employees are then grouped by department in the order the
//! departments are first seen.

use crate::error::Result;
use crate::money::Dollars;
use crate::rate::RateCandidates;
use crate::record::{
    EmployeeRecord, RecordStore, DEPARTMENT_FIELD, HOURS_FIELD, NAME_FIELD, PAYOUT_FIELD,
    RATE_FIELD_MARKER,
};
use crate::report::{Report, ReportEntry};
use log::{debug, warn};
use thiserror::Error;

/// Turns a record store into a report.
///
/// Generators may annotate the records they are given with derived fields.
pub trait ReportGenerator {
    fn generate(&self, store: &mut RecordStore) -> Result<Report>;
}

/// Why a single employee's payout could not be computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoutFailure {
    #[error("no pay rate field found")]
    NoRateField,

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{field}' is not an integer: {value:?}")]
    NotANumber { field: String, value: String },

    #[error("payout overflows for {hours} hours at rate {rate}")]
    Overflow { hours: i128, rate: i128 },
}

/// A successfully computed payout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    /// Name of the field the rate was taken from.
    pub rate_field: String,
    pub amount: Dollars,
}

/// Computes one record's payout as `hours_worked * rate`.
pub fn compute_payout(
    record: &EmployeeRecord,
    candidates: &RateCandidates,
) -> std::result::Result<Payout, PayoutFailure> {
    let rate_field = candidates
        .resolve(record)
        .ok_or(PayoutFailure::NoRateField)?;
    let hours = integer_field(record, HOURS_FIELD)?;
    let rate = integer_field(record, rate_field)?;
    let amount =
        Dollars::checked_product(hours, rate).ok_or(PayoutFailure::Overflow { hours, rate })?;

    Ok(Payout {
        rate_field: rate_field.to_string(),
        amount,
    })
}

/// Reads a field and parses it as a signed integer.
pub fn integer_field(
    record: &EmployeeRecord,
    field: &str,
) -> std::result::Result<i128, PayoutFailure> {
    let value = record
        .get(field)
        .ok_or_else(|| PayoutFailure::MissingField(field.to_string()))?;
    value
        .trim()
        .parse::<i128>()
        .map_err(|_| PayoutFailure::NotANumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// The `payout` report: per-department payouts with hour and payout totals.
#[derive(Debug, Clone, Default)]
pub struct PayoutReportGenerator {
    candidates: RateCandidates,
}

impl PayoutReportGenerator {
    pub fn new(candidates: RateCandidates) -> Self {
        PayoutReportGenerator { candidates }
    }

    /// Computes the payout for one record and stores it on the record.
    fn annotate(&self, key: &str, record: &mut EmployeeRecord) -> Dollars {
        match compute_payout(record, &self.candidates) {
            Ok(payout) => {
                debug!("{}: {} via '{}'", key, payout.amount, payout.rate_field);
                record.set(RATE_FIELD_MARKER, payout.rate_field);
                record.set(PAYOUT_FIELD, payout.amount.to_string());
                payout.amount
            }
            Err(failure) => {
                warn!("{}: payout set to {}: {}", key, Dollars::ZERO, failure);
                record.set(RATE_FIELD_MARKER, "");
                record.set(PAYOUT_FIELD, Dollars::ZERO.to_string());
                Dollars::ZERO
            }
        }
    }
}

/// Builds the report row for an annotated record, with defaults for absent fields.
fn employee_entry(record: &EmployeeRecord) -> ReportEntry {
    let rate_field = record.get(RATE_FIELD_MARKER).unwrap_or_default();
    ReportEntry::Employee {
        name: record.get(NAME_FIELD).unwrap_or("Unknown").to_string(),
        hours: record.get(HOURS_FIELD).unwrap_or("0").to_string(),
        rate: record.get(rate_field).unwrap_or("0").to_string(),
        payout: record.get(PAYOUT_FIELD).unwrap_or("0").to_string(),
    }
}

impl ReportGenerator for PayoutReportGenerator {
    fn generate(&self, store: &mut RecordStore) -> Result<Report> {
        let mut report = Report::new();

        for (key, record) in store.iter_mut() {
            let payout = self.annotate(key, record);

            let Some(department) = record.get(DEPARTMENT_FIELD) else {
                warn!("{}: no '{}' field, excluded from report", key, DEPARTMENT_FIELD);
                continue;
            };

            let hours = match integer_field(record, HOURS_FIELD) {
                Ok(hours) => hours,
                Err(failure) => {
                    debug!("{}: counting 0 hours: {}", key, failure);
                    0
                }
            };

            report.add_employee(department, employee_entry(record), hours, payout)?;
        }

        Ok(report)
    }
}
