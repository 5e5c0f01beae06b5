//! Read → generate → render pipeline and the registries of reports and formats.

use crate::error::{ReportError, Result};
use crate::payout::{PayoutReportGenerator, ReportGenerator};
use crate::rate::RateCandidates;
use crate::record::ReportReader;
use crate::render::{ConsoleReportRenderer, JsonReportRenderer, ReportRenderer};
use log::debug;
use std::io::Write;
use std::str::FromStr;

/// Runs one reader, one generator and one renderer in that order.
pub struct ReportCore {
    reader: Box<dyn ReportReader>,
    generator: Box<dyn ReportGenerator>,
    renderer: Box<dyn ReportRenderer>,
}

impl ReportCore {
    pub fn new(
        reader: Box<dyn ReportReader>,
        generator: Box<dyn ReportGenerator>,
        renderer: Box<dyn ReportRenderer>,
    ) -> Self {
        ReportCore {
            reader,
            generator,
            renderer,
        }
    }

    /// Produces the report and writes it to `out` with a single `write_all`.
    ///
    /// Nothing is written if reading, generating or rendering fails.
    pub fn run<W: Write>(&self, mut out: W) -> Result<()> {
        let mut records = self.reader.read()?;
        debug!("Read {} records", records.len());

        let report = self.generator.generate(&mut records)?;
        debug!("Generated report with {} departments", report.len());

        let mut output = self.renderer.render(&report)?;
        output.push('\n');

        out.write_all(output.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Reports that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Payout,
}

impl ReportKind {
    pub const ALL: [ReportKind; 1] = [ReportKind::Payout];

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Payout => "payout",
        }
    }

    pub fn generator(&self, candidates: RateCandidates) -> Box<dyn ReportGenerator> {
        match self {
            ReportKind::Payout => Box::new(PayoutReportGenerator::new(candidates)),
        }
    }

    fn supported() -> String {
        Self::ALL.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ReportError::UnknownReport {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}

/// Output formats that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Console,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Console];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Console => "console",
        }
    }

    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Json => Box::new(JsonReportRenderer),
            OutputFormat::Console => Box::new(ConsoleReportRenderer),
        }
    }

    fn supported() -> String {
        Self::ALL.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ReportError::UnknownFormat {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}
