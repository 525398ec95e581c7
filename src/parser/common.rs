// Parser utilities

use crate::registry::ClassModel;
use miette::Result;
use std::path::Path;

/// Result of parsing a source file
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Namespace declared in the file, if any
    pub namespace: Option<String>,

    /// Classes declared in the file
    pub classes: Vec<ClassModel>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Trait for language-specific parsers
pub trait Parser {
    /// Parse a source file and extract its class declarations
    fn parse(&self, path: &Path, contents: &str) -> Result<ParseResult>;
}

/// Extract text from a node
pub fn node_text<'a>(node: tree_sitter::Node<'a>, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}
