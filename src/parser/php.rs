// PHP source parser built on tree-sitter

use super::common::{node_text, ParseResult, Parser};
use crate::registry::{ClassModel, MethodModel, Visibility};
use miette::{IntoDiagnostic, Result};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Parser as TsParser};

/// PHP source code parser using tree-sitter
pub struct PhpParser;

impl PhpParser {
    pub fn new() -> Self {
        Self
    }

    /// Find the file's declared namespace, e.g. `App\Http\Controllers`
    fn extract_namespace(&self, root: Node, source: &str) -> Option<String> {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "namespace_definition" {
                if let Some(name) = child.child_by_field_name("name") {
                    return Some(node_text(name, source).to_string());
                }
            }
        }
        None
    }

    fn extract_classes(
        &self,
        path: &Path,
        node: Node,
        source: &str,
        namespace: &Option<String>,
        result: &mut ParseResult,
    ) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "class_declaration" {
                if let Some(class) = self.extract_class(path, child, source, namespace) {
                    result.classes.push(class);
                }
            } else {
                // Recurse for bracketed namespaces and other nesting
                self.extract_classes(path, child, source, namespace, result);
            }
        }
    }

    fn extract_class(
        &self,
        path: &Path,
        node: Node,
        source: &str,
        namespace: &Option<String>,
    ) -> Option<ClassModel> {
        let name_node = node.child_by_field_name("name")?;
        let name = node_text(name_node, source).to_string();

        let fqcn = match namespace {
            Some(ns) => format!("{}\\{}", ns, name),
            None => name.clone(),
        };

        let parent = self.extract_parent(node, source);

        let mut class = ClassModel::new(fqcn, name, path.to_path_buf());
        class.parent = parent;

        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            for member in body.children(&mut cursor) {
                if member.kind() == "method_declaration" {
                    if let Some(method) = self.extract_method(member, source) {
                        class.methods.push(method);
                    }
                }
            }
        }

        Some(class)
    }

    /// Read the base class name from the `extends` clause, if present
    fn extract_parent(&self, node: Node, source: &str) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "base_clause" {
                let mut base_cursor = child.walk();
                for base in child.children(&mut base_cursor) {
                    if base.kind() == "name" || base.kind() == "qualified_name" {
                        return Some(node_text(base, source).to_string());
                    }
                }
            }
        }
        None
    }

    fn extract_method(&self, node: Node, source: &str) -> Option<MethodModel> {
        let name_node = node.child_by_field_name("name")?;
        let name = node_text(name_node, source).to_string();

        // PHP members without a modifier default to public
        let mut visibility = Visibility::Public;
        let mut is_static = false;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "visibility_modifier" => {
                    visibility = Visibility::from_modifier(node_text(child, source));
                }
                "static_modifier" => {
                    is_static = true;
                }
                _ => {}
            }
        }

        Some(MethodModel {
            name,
            visibility,
            is_static,
            line: name_node.start_position().row + 1,
        })
    }
}

impl Default for PhpParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for PhpParser {
    fn parse(&self, path: &Path, contents: &str) -> Result<ParseResult> {
        let mut parser = TsParser::new();
        parser
            .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
            .into_diagnostic()?;

        let tree = parser
            .parse(contents, None)
            .ok_or_else(|| miette::miette!("Failed to parse PHP file: {}", path.display()))?;

        let root = tree.root_node();
        let mut result = ParseResult::new();

        result.namespace = self.extract_namespace(root, contents);
        let namespace = result.namespace.clone();
        self.extract_classes(path, root, contents, &namespace, &mut result);

        debug!(
            "Parsed {}: {} classes",
            path.display(),
            result.classes.len()
        );

        Ok(result)
    }
}
