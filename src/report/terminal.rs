use super::{summary_lines, Finding};
use crate::analysis::RunStatistics;
use colored::Colorize;
use miette::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, findings: &[Finding], stats: &RunStatistics) -> Result<()> {
        if findings.is_empty() {
            println!("{}", "No unused handler methods found!".green().bold());
        } else {
            // Group by file
            let mut by_file: HashMap<PathBuf, Vec<&Finding>> = HashMap::new();
            for finding in findings {
                by_file.entry(finding.file.clone()).or_default().push(finding);
            }

            println!();
            println!(
                "{}",
                format!("Found {} unused handler methods:", findings.len())
                    .yellow()
                    .bold()
            );
            println!();

            let mut files: Vec<_> = by_file.keys().collect();
            files.sort();

            for file in files {
                println!("{}", file.display().to_string().cyan().bold());
                for finding in &by_file[file] {
                    println!(
                        "  {} {} [{}] {}",
                        format!("{}:", finding.line).dimmed(),
                        "warning".yellow().bold(),
                        finding.category.dimmed(),
                        finding.message
                    );
                }
                println!();
            }
        }

        println!("{}", "─".repeat(60).dimmed());
        for line in summary_lines(stats) {
            println!("{}", line);
        }

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
