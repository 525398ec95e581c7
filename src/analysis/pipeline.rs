// Full discovery-and-reconciliation pipeline

use super::{diff, MethodLocator, Orphan, RunStatistics};
use crate::config::Config;
use crate::discovery::FileFinder;
use crate::registry::{ParallelRegistryBuilder, RegistryBuilder};
use crate::routes::{RouteSnapshot, RouteTable};
use crate::scanner::MethodScanner;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::Path;
use tracing::debug;

/// Outcome of one full pipeline run
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Orphaned handler methods with located source lines
    pub orphans: Vec<Orphan>,

    /// Route accounting from the snapshot step
    pub stats: RunStatistics,

    /// Number of handler files scanned
    pub files_scanned: usize,

    /// Orphans dropped because their line could not be re-located
    pub unlocated: usize,
}

/// Single-pass batch pipeline: discover, parse, scan, snapshot, diff, locate.
///
/// Every invocation recomputes both method sets from scratch; there is no
/// persisted state between runs.
pub struct Pipeline<'a> {
    config: &'a Config,
    parallel: bool,
    progress: Option<&'a (dyn Fn(usize, usize) + Sync)>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            parallel: false,
            progress: None,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Install a callback invoked as `(parsed, total)` after each handler
    /// file in sequential mode. Parallel runs report no per-file progress.
    pub fn with_progress(mut self, progress: &'a (dyn Fn(usize, usize) + Sync)) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self, project_root: &Path, table: &RouteTable) -> Result<PipelineOutcome> {
        let handlers_root = project_root.join(&self.config.handlers_dir);
        let app_root = project_root
            .join(&self.config.app_root)
            .canonicalize()
            .into_diagnostic()
            .wrap_err_with(|| {
                format!(
                    "Application root not found: {}",
                    project_root.join(&self.config.app_root).display()
                )
            })?;

        let finder = FileFinder::new(self.config);
        let files = finder.find_files(&handlers_root)?;

        let registry = if self.parallel {
            ParallelRegistryBuilder::new().build_from_files(&files)?
        } else {
            let mut builder = RegistryBuilder::new();
            for (parsed, file) in files.iter().enumerate() {
                builder.process_file(file)?;
                if let Some(progress) = self.progress {
                    progress(parsed + 1, files.len());
                }
            }
            builder.build()
        };

        let scanner = MethodScanner::new(self.config);
        let static_set = scanner.scan(&files, &registry, &app_root);

        let snapshot = RouteSnapshot::new(&registry, self.config.default_method.clone());
        let (registered_set, stats) = snapshot.snapshot(table);

        let candidates = diff(&static_set, &registered_set);

        // Per-item failure here must not abort the remaining orphans
        let locator = MethodLocator::new();
        let mut orphans = Vec::new();
        let mut unlocated = 0;
        for record in candidates {
            match locator.locate(&record.source_file, &record.method) {
                Some(line) => orphans.push(Orphan { record, line }),
                None => {
                    debug!(
                        "Dropping orphan {}::{} - line not locatable",
                        record.class, record.method
                    );
                    unlocated += 1;
                }
            }
        }

        Ok(PipelineOutcome {
            orphans,
            stats,
            files_scanned: files.len(),
            unlocated,
        })
    }
}
