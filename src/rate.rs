//! Pay-rate field resolution.
//!
//! Input files disagree on what the pay-rate column is called. The resolver
//! walks an ordered list of candidate names and picks the first one the record
//! has. Only the field name is checked; whether its value is a usable number is
//! decided later by the generator.

use crate::record::{EmployeeRecord, RecordStore};

/// Built-in candidate names, highest priority first.
pub const DEFAULT_RATE_FIELDS: [&str; 3] = ["rate", "hourly_rate", "salary"];

/// Candidate names including the `hourly_rat` misspelling seen in some exports.
pub const EXTENDED_RATE_FIELDS: [&str; 4] = ["rate", "hourly_rate", "hourly_rat", "salary"];

/// Ordered set of field names that may hold an employee's pay rate.
///
/// Order is significant: a record carrying both `rate` and `salary` resolves to
/// `rate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCandidates {
    fields: Vec<String>,
}

impl RateCandidates {
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Self {
        RateCandidates {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in set plus the `hourly_rat` spelling.
    pub fn extended() -> Self {
        Self::new(EXTENDED_RATE_FIELDS)
    }

    /// Appends lower-priority candidates, ignoring names already present.
    pub fn with_extra<S: Into<String>>(mut self, extra: impl IntoIterator<Item = S>) -> Self {
        for name in extra {
            let name = name.into();
            if !self.fields.contains(&name) {
                self.fields.push(name);
            }
        }
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the first candidate present on the record.
    pub fn resolve(&self, record: &EmployeeRecord) -> Option<&str> {
        self.fields
            .iter()
            .map(String::as_str)
            .find(|field| record.contains(field))
    }
}

impl Default for RateCandidates {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_FIELDS)
    }
}

/// Resolves the rate field of the record stored under `key`.
///
/// Returns `None` both for an unknown key and for a record with no candidate.
pub fn resolve_rate<'a>(
    store: &RecordStore,
    candidates: &'a RateCandidates,
    key: &str,
) -> Option<&'a str> {
    let record = store.get(key)?;
    candidates.resolve(record)
}
