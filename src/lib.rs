//! unwired - Unreachable handler method detection for PHP (Laravel)
//!
//! This library finds public controller methods that exist in source but are
//! never wired into the application's route table.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .php files under the handlers root
//! 2. **Symbol Table** - Parse each file with tree-sitter into a class registry
//! 3. **Static Scan** - Enumerate self-declared public methods per class
//! 4. **Route Snapshot** - Enumerate string-form route targets from the manifest
//! 5. **Reconciliation** - Key-set difference between the two method sets
//! 6. **Location & Reporting** - Re-locate each orphan's source line and report

pub mod config;
pub mod discovery;
pub mod parser;
pub mod registry;
pub mod scanner;
pub mod routes;
pub mod analysis;
pub mod report;

pub use config::Config;
pub use discovery::FileFinder;
pub use registry::{ClassModel, ClassRegistry, MethodModel, Visibility};
pub use scanner::MethodScanner;
pub use routes::{CallbackTarget, Route, RouteSnapshot, RouteTable};
pub use analysis::{diff, HandlerRecord, MethodLocator, Orphan, Pipeline, RunStatistics};
pub use report::{DiagnosticSink, Finding, ReportFormat, Reporter};
