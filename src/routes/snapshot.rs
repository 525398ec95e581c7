// Registered-method enumeration from the routing table

use super::{parse_callback, CallbackTarget, RouteTable};
use crate::analysis::{HandlerRecord, RunStatistics};
use crate::registry::ClassRegistry;
use tracing::debug;

/// Reads the routing table and extracts the registered handler set.
pub struct RouteSnapshot<'a> {
    registry: &'a ClassRegistry,
    default_method: String,
}

impl<'a> RouteSnapshot<'a> {
    pub fn new(registry: &'a ClassRegistry, default_method: impl Into<String>) -> Self {
        Self {
            registry,
            default_method: default_method.into(),
        }
    }

    /// Build the registered method set plus run statistics.
    ///
    /// Every route is either checked (string-form target) or skipped
    /// (closure or missing action), so `checked + skipped` equals the table
    /// size. A checked target whose class is not in the symbol table still
    /// counts as checked but yields no record.
    pub fn snapshot(&self, table: &RouteTable) -> (Vec<HandlerRecord>, RunStatistics) {
        let mut records = Vec::new();
        let mut stats = RunStatistics::default();

        for route in table.routes() {
            let target = match route.action.as_deref() {
                Some(action) => parse_callback(action, &self.default_method),
                None => CallbackTarget::Unresolved,
            };

            match target {
                CallbackTarget::Resolved { class, method } => {
                    stats.checked += 1;

                    match self.registry.get(&class) {
                        Some(model) => {
                            records.push(HandlerRecord::new(class, method, model.file.clone()));
                        }
                        None => {
                            // Known edge case: the route names a class the
                            // symbol table cannot resolve.
                            debug!("Route target {} not in symbol table", class);
                        }
                    }
                }
                CallbackTarget::Unresolved => {
                    stats.skipped += 1;
                }
            }
        }

        debug!(
            "Registered set holds {} handler methods ({} checked, {} skipped)",
            records.len(),
            stats.checked,
            stats.skipped
        );
        (records, stats)
    }
}
