// File discovery utilities

use crate::config::Config;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A discovered handler source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Canonical absolute path to the file
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load and return owned contents
    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))
    }
}

/// Check if a path looks like a PHP source file
pub(crate) fn is_php_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("php"))
        .unwrap_or(false)
}

/// File finder for discovering handler sources under a root directory
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all PHP source files under the given root.
    ///
    /// Traversal order is unspecified; downstream code must only depend on
    /// set membership. Paths are canonicalized so both scanning passes report
    /// the same representation for a file.
    pub fn find_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        debug!("Scanning for handler files in: {}", root.display());

        if !root.is_dir() {
            return Err(miette::miette!(
                "Handlers directory not found: {}",
                root.display()
            ));
        }

        let walker = WalkBuilder::new(root)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        let files = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();

                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                if !is_php_file(path) {
                    return None;
                }

                let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
                trace!("Found handler file: {}", canonical.display());
                Some(SourceFile::new(canonical))
            })
            .collect::<Vec<_>>();

        debug!("Found {} handler files", files.len());
        Ok(files)
    }
}
