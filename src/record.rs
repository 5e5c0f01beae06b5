//! Employee records and the CSV reader that builds them.
//!
//! Records carry no fixed schema: every CSV file brings its own header and the
//! header names become the record's field names. Lines are split on bare commas
//! with quoting disabled, so a value that itself contains a comma shifts the
//! remaining columns. That is a known limitation of the input format.

use crate::error::{ReportError, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Field holding the number of hours an employee worked.
pub const HOURS_FIELD: &str = "hours_worked";
/// Field holding the employee's department.
pub const DEPARTMENT_FIELD: &str = "department";
/// Field holding the employee's display name.
pub const NAME_FIELD: &str = "name";
/// Derived field written by the generator with the computed payout.
pub const PAYOUT_FIELD: &str = "payout";
/// Derived field written by the generator naming the rate field that was used.
pub const RATE_FIELD_MARKER: &str = "_rate_field";

/// One employee's raw field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecord {
    fields: HashMap<String, String>,
}

impl EmployeeRecord {
    /// Builds a record from `(field, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EmployeeRecord {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// All records read for one run, in file-then-row order.
///
/// Keys are `employee_1`, `employee_2`, ... and keep counting across files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<(String, EmployeeRecord)>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSV text into a fresh store.
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        let mut store = RecordStore::new();
        store.extend_from_csv(csv)?;
        Ok(store)
    }

    /// Appends the records of one CSV source.
    ///
    /// Each line, the header included, is stripped of surrounding whitespace
    /// before it is split. The first line is the header. Short rows keep only
    /// the fields they have, values beyond the header length are dropped, and
    /// blank lines are skipped. Returns the number of records added.
    pub fn extend_from_csv(&mut self, csv: &str) -> Result<usize> {
        let stripped = csv.lines().map(str::trim).collect::<Vec<_>>().join("\n");
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .from_reader(stripped.as_bytes());

        let header = csv_reader.headers()?.clone();
        let before = self.records.len();

        for result in csv_reader.records() {
            let row = result?;
            let record = EmployeeRecord::from_pairs(header.iter().zip(row.iter()));
            self.push(record);
        }

        Ok(self.records.len() - before)
    }

    /// Adds a record under the next sequential key and returns that key.
    pub fn push(&mut self, record: EmployeeRecord) -> &str {
        let key = format!("employee_{}", self.records.len() + 1);
        self.records.push((key, record));
        &self.records[self.records.len() - 1].0
    }

    pub fn get(&self, key: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmployeeRecord)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut EmployeeRecord)> {
        self.records.iter_mut().map(|(k, r)| (k.as_str(), r))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<Vec<(K, V)>> for RecordStore {
    fn from_iter<T: IntoIterator<Item = Vec<(K, V)>>>(iter: T) -> Self {
        let mut store = RecordStore::new();
        for pairs in iter {
            store.push(EmployeeRecord::from_pairs(pairs));
        }
        store
    }
}

/// Produces the records a report is generated from.
pub trait ReportReader {
    fn read(&self) -> Result<RecordStore>;
}

/// Reads employee records from a list of CSV files.
#[derive(Debug, Clone)]
pub struct CsvReportReader {
    files: Vec<PathBuf>,
}

impl CsvReportReader {
    pub fn new<P: Into<PathBuf>>(files: impl IntoIterator<Item = P>) -> Self {
        CsvReportReader {
            files: files.into_iter().map(Into::into).collect(),
        }
    }
}

impl ReportReader for CsvReportReader {
    fn read(&self) -> Result<RecordStore> {
        let mut store = RecordStore::new();

        for path in &self.files {
            let contents = read_file(path)?;
            let added = store.extend_from_csv(&contents)?;
            debug!("Read {} records from {}", added, path.display());
        }

        Ok(store)
    }
}

/// Reads a whole file, mapping a missing path to [`ReportError::FileNotFound`].
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::Io(e),
    })
}
