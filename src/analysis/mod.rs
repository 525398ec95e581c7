//! Reconciliation of the static and registered handler method sets.

mod locate;
mod pipeline;
mod reconcile;

pub use locate::MethodLocator;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use reconcile::diff;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One handler method, as seen by either scanning pass.
///
/// Identity for diff purposes is `(class, method)` only; `source_file` is
/// carried for reporting and excluded from the key, since the two passes may
/// report different path representations for the same class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRecord {
    /// Fully qualified class name
    pub class: String,

    /// Method name
    pub method: String,

    /// File the declaring class lives in
    pub source_file: PathBuf,
}

impl HandlerRecord {
    pub fn new(class: String, method: String, source_file: PathBuf) -> Self {
        Self {
            class,
            method,
            source_file,
        }
    }

    /// The diff key: class + method, never the file
    pub fn key(&self) -> (&str, &str) {
        (&self.class, &self.method)
    }
}

/// Counters accumulated while building the registered method set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Routes with a string-form handler target
    pub checked: usize,

    /// Routes whose target is not statically resolvable (closures etc.)
    pub skipped: usize,
}

/// An orphaned handler method with its located source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub record: HandlerRecord,
    pub line: usize,
}
