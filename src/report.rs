//! Report structure produced by generators and consumed by renderers.
//!
//! A [`Report`] maps department names to their entries and keeps departments in
//! the order they were first added. Each department's list holds one
//! [`ReportEntry::Employee`] per member followed by exactly one
//! [`ReportEntry::TotalHours`] and one [`ReportEntry::TotalPayout`].

use crate::error::{ReportError, Result};
use crate::money::Dollars;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One element of a department's entry list.
///
/// Serializes as a flat JSON object: `{name, hours, rate, payout}` for
/// employees, `{total_hours}` and `{total_payout}` for the summary rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Employee {
        name: String,
        hours: String,
        rate: String,
        payout: String,
    },
    TotalHours { total_hours: String },
    TotalPayout { total_payout: String },
}

impl ReportEntry {
    /// Field names and values in output order.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        match self {
            ReportEntry::Employee {
                name,
                hours,
                rate,
                payout,
            } => vec![
                ("name", name.as_str()),
                ("hours", hours.as_str()),
                ("rate", rate.as_str()),
                ("payout", payout.as_str()),
            ],
            ReportEntry::TotalHours { total_hours } => vec![("total_hours", total_hours.as_str())],
            ReportEntry::TotalPayout { total_payout } => vec![("total_payout", total_payout.as_str())],
        }
    }

    pub fn is_summary(&self) -> bool {
        !matches!(self, ReportEntry::Employee { .. })
    }
}

/// Members of one department plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentAggregate {
    entries: Vec<ReportEntry>,
    total_hours: i128,
    total_payout: Dollars,
}

impl DepartmentAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn total_hours(&self) -> i128 {
        self.total_hours
    }

    pub fn total_payout(&self) -> Dollars {
        self.total_payout
    }

    /// Employee entries followed by the two summary entries.
    pub fn entries(&self) -> Vec<ReportEntry> {
        let mut entries = self.entries.clone();
        entries.push(ReportEntry::TotalHours {
            total_hours: self.total_hours.to_string(),
        });
        entries.push(ReportEntry::TotalPayout {
            total_payout: self.total_payout.to_string(),
        });
        entries
    }
}

impl Serialize for DepartmentAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

/// Department name to aggregate, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    departments: Vec<(String, DepartmentAggregate)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee entry to `department` and folds its numbers into the totals.
    ///
    /// Fails without changing the report if either total would overflow.
    pub fn add_employee(
        &mut self,
        department: &str,
        entry: ReportEntry,
        hours: i128,
        payout: Dollars,
    ) -> Result<()> {
        debug_assert!(!entry.is_summary());
        let aggregate = self.department_mut(department);

        let total_hours =
            aggregate
                .total_hours
                .checked_add(hours)
                .ok_or_else(|| ReportError::TotalOverflow {
                    department: department.to_string(),
                    total: "total_hours",
                })?;
        let total_payout =
            aggregate
                .total_payout
                .checked_add(payout)
                .ok_or_else(|| ReportError::TotalOverflow {
                    department: department.to_string(),
                    total: "total_payout",
                })?;

        aggregate.entries.push(entry);
        aggregate.total_hours = total_hours;
        aggregate.total_payout = total_payout;
        Ok(())
    }

    /// Returns the aggregate for `name`, creating it at the end if missing.
    fn department_mut(&mut self, name: &str) -> &mut DepartmentAggregate {
        let idx = match self.departments.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.departments
                    .push((name.to_string(), DepartmentAggregate::new()));
                self.departments.len() - 1
            }
        };
        &mut self.departments[idx].1
    }

    pub fn get(&self, name: &str) -> Option<&DepartmentAggregate> {
        self.departments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, agg)| agg)
    }

    pub fn department_names(&self) -> impl Iterator<Item = &str> {
        self.departments.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DepartmentAggregate)> {
        self.departments.iter().map(|(n, agg)| (n.as_str(), agg))
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.departments.len()))?;
        for (name, aggregate) in &self.departments {
            map.serialize_entry(name, aggregate)?;
        }
        map.end()
    }
}
