use super::{summary_lines, Finding};
use crate::analysis::RunStatistics;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, findings: &[Finding], stats: &RunStatistics) -> Result<()> {
        let report = JsonReport::build(findings, stats);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        // Summary lines go to stderr so the JSON body stays machine-readable
        for line in summary_lines(stats) {
            eprintln!("{}", line);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    total_findings: usize,
    findings: Vec<JsonFinding<'a>>,
    stats: JsonStats,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    file: String,
    line: usize,
    category: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonStats {
    checked: usize,
    skipped: usize,
}

impl<'a> JsonReport<'a> {
    fn build(findings: &'a [Finding], stats: &RunStatistics) -> Self {
        Self {
            version: "1.0",
            total_findings: findings.len(),
            findings: findings
                .iter()
                .map(|f| JsonFinding {
                    file: f.file.to_string_lossy().to_string(),
                    line: f.line,
                    category: &f.category,
                    message: &f.message,
                })
                .collect(),
            stats: JsonStats {
                checked: stats.checked,
                skipped: stats.skipped,
            },
        }
    }
}
