//! Report renderers.

use crate::error::{ReportError, Result};
use crate::report::Report;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

/// Formats a report as text. Implementations must not keep state between calls.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<String>;
}

/// Pretty-printed JSON with four-space indentation.
///
/// Department order is preserved and non-ASCII text is written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportRenderer;

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        report.serialize(&mut serializer)?;
        String::from_utf8(buf)
            .map_err(|e| ReportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Plain-text layout for reading in a terminal.
///
/// Each department gets a heading and a rule; each entry is printed as a line
/// of field names over a line of values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReportRenderer;

const RULE_WIDTH: usize = 25;
const KEY_SEPARATOR: &str = "      ";
const VALUE_SEPARATOR: &str = "   ";

impl ReportRenderer for ConsoleReportRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        for (department, aggregate) in report.iter() {
            out.push('\n');
            out.push_str(department);
            out.push('\n');
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push_str("\n\n");

            for entry in aggregate.entries() {
                let columns = entry.columns();
                let keys: Vec<&str> = columns.iter().map(|(k, _)| *k).collect();
                let values: Vec<&str> = columns.iter().map(|(_, v)| *v).collect();
                out.push_str(&keys.join(KEY_SEPARATOR));
                out.push('\n');
                out.push_str(&values.join(VALUE_SEPARATOR));
                out.push_str("\n\n");
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Dollars;
    use crate::report::ReportEntry;

    fn employee(name: &str, hours: &str, rate: &str, payout: &str) -> ReportEntry {
        ReportEntry::Employee {
            name: name.to_string(),
            hours: hours.to_string(),
            rate: rate.to_string(),
            payout: payout.to_string(),
        }
    }

    fn sample_report() -> Report {
        let mut report = Report::new();
        report
            .add_employee("Design", employee("Bob", "100", "35", "$3500"), 100, Dollars::new(3500))
            .unwrap();
        report
            .add_employee("Отдел", employee("Иван", "1", "2", "$2"), 1, Dollars::new(2))
            .unwrap();
        report
    }

    #[test]
    fn test_json_parses_back_with_department_keys() {
        let output = JsonReportRenderer.render(&sample_report()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["Design"][0]["name"], "Bob");
        assert_eq!(parsed["Design"][1]["total_hours"], "100");
        assert_eq!(parsed["Design"][2]["total_payout"], "$3500");
        let keys: Vec<_> = parsed.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"Design".to_string()));
        assert!(keys.contains(&"Отдел".to_string()));
    }

    #[test]
    fn test_json_layout_and_unescaped_text() {
        let output = JsonReportRenderer.render(&sample_report()).unwrap();

        assert!(output.starts_with("{\n    \"Design\": [\n        {\n            \"name\": \"Bob\","));
        assert!(output.contains("\"Иван\""));
        assert!(!output.contains("\\u"));
        assert!(output.find("Design").unwrap() < output.find("Отдел").unwrap());
    }

    #[test]
    fn test_json_empty_report() {
        assert_eq!(JsonReportRenderer.render(&Report::new()).unwrap(), "{}");
    }

    #[test]
    fn test_console_layout() {
        let mut report = Report::new();
        report
            .add_employee("Design", employee("Bob", "100", "35", "$3500"), 100, Dollars::new(3500))
            .unwrap();

        let output = ConsoleReportRenderer.render(&report).unwrap();
        let expected = "\nDesign\n-------------------------\n\n\
name      hours      rate      payout\n\
Bob   100   35   $3500\n\n\
total_hours\n\
100\n\n\
total_payout\n\
$3500\n\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let report = sample_report();
        assert_eq!(
            JsonReportRenderer.render(&report).unwrap(),
            JsonReportRenderer.render(&report).unwrap()
        );
        assert_eq!(
            ConsoleReportRenderer.render(&report).unwrap(),
            ConsoleReportRenderer.render(&report).unwrap()
        );
    }
}
