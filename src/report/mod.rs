mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::analysis::RunStatistics;
use miette::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One reported diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: PathBuf,
    pub line: usize,
    pub category: String,
    pub message: String,
}

/// Accumulates diagnostics across a run.
///
/// The engine records one finding per located orphan; `has_errors` is the
/// process's sole machine-readable success signal.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    findings: Vec<Finding>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, file: &Path, line: usize, category: &str, message: String) {
        self.findings.push(Finding {
            file: file.to_path_buf(),
            line,
            category: category.to_string(),
            message,
        });
    }

    /// True iff at least one diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}

/// Output format for reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl ReportFormat {
    /// Parse a config-file format name. Unknown names fall back to the
    /// terminal format with a warning rather than failing the run.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => ReportFormat::Json,
            "terminal" => ReportFormat::Terminal,
            other => {
                tracing::warn!("Unknown report format {:?}, using terminal", other);
                ReportFormat::Terminal
            }
        }
    }
}

/// Reporter for rendering accumulated findings
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    pub fn report(&self, findings: &[Finding], stats: &RunStatistics) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new();
                reporter.report(findings, stats)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(findings, stats)
            }
        }
    }
}

/// The two summary lines every run prints
pub(crate) fn summary_lines(stats: &RunStatistics) -> [String; 2] {
    [
        format!(
            "{} controller methods were checked. ({} skipped)",
            stats.checked, stats.skipped
        ),
        format!("{} gate definitions were checked.", stats.checked),
    ]
}
