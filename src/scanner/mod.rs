//! Static enumeration of handler methods from source files.

use crate::analysis::HandlerRecord;
use crate::config::Config;
use crate::discovery::SourceFile;
use crate::registry::ClassRegistry;
use std::path::Path;
use tracing::{debug, trace};

/// Scans discovered handler files and emits one record per public,
/// self-declared, non-constructor method of every resolvable class.
pub struct MethodScanner<'a> {
    config: &'a Config,
}

impl<'a> MethodScanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Derive a fully-qualified class name from a file path relative to the
    /// application root, assuming the one-class-per-file, path-mirrors-
    /// namespace convention. `app/Http/Controllers/Billing/Invoice.php`
    /// becomes `App\Http\Controllers\Billing\Invoice`.
    pub fn derive_class_name(&self, file: &Path, app_root: &Path) -> Option<String> {
        let relative = file.strip_prefix(app_root).ok()?;
        let stem = relative.with_extension("");

        let mut parts = vec![self.config.namespace_prefix.clone()];
        for component in stem.components() {
            parts.push(component.as_os_str().to_str()?.to_string());
        }
        Some(parts.join("\\"))
    }

    /// Build the static method set.
    ///
    /// Files whose derived class name does not resolve in the registry are
    /// silently skipped; they are convention violations, not errors. Output
    /// order follows the input file order, but callers must only depend on
    /// set membership.
    pub fn scan(
        &self,
        files: &[SourceFile],
        registry: &ClassRegistry,
        app_root: &Path,
    ) -> Vec<HandlerRecord> {
        let mut records = Vec::new();

        for file in files {
            let Some(class_name) = self.derive_class_name(&file.path, app_root) else {
                trace!("No class name derivable for {}", file.path.display());
                continue;
            };

            let Some(class) = registry.get(&class_name) else {
                debug!(
                    "Derived class {} does not resolve, skipping {}",
                    class_name,
                    file.path.display()
                );
                continue;
            };

            for method in class.self_declared_public_methods() {
                records.push(HandlerRecord::new(
                    class_name.clone(),
                    method.name.clone(),
                    file.path.clone(),
                ));
            }
        }

        debug!("Static set holds {} handler methods", records.len());
        records
    }
}
