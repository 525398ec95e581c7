// Source line recovery for orphaned methods

use crate::parser::{Parser as SourceParser, PhpParser};
use std::path::Path;
use tracing::debug;

/// Re-locates a method declaration's line by re-parsing the source text.
///
/// Deliberately independent of the symbol table built earlier: the orphan set
/// is small compared to the full method set, so a second pass per orphan is
/// cheap, and it reflects the file as it is *now* rather than as it was when
/// the registry was built.
pub struct MethodLocator {
    parser: PhpParser,
}

impl MethodLocator {
    pub fn new() -> Self {
        Self {
            parser: PhpParser::new(),
        }
    }

    /// Return the 1-indexed line of the first declaration of `method` in
    /// `file`, or `None` when the file is unreadable or no longer declares
    /// the method. Callers must treat `None` as "drop this diagnostic", not
    /// as an error.
    pub fn locate(&self, file: &Path, method: &str) -> Option<usize> {
        let contents = match std::fs::read_to_string(file) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Cannot re-read {}: {}", file.display(), e);
                return None;
            }
        };

        let result = match self.parser.parse(file, &contents) {
            Ok(result) => result,
            Err(e) => {
                debug!("Cannot re-parse {}: {}", file.display(), e);
                return None;
            }
        };

        result
            .classes
            .iter()
            .flat_map(|class| class.methods.iter())
            .find(|m| m.name == method)
            .map(|m| m.line)
    }
}

impl Default for MethodLocator {
    fn default() -> Self {
        Self::new()
    }
}
