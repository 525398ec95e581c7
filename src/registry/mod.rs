//! Class symbol table built from parsed handler sources.
//!
//! This is the ahead-of-time stand-in for runtime reflection: a class "exists"
//! iff its fully-qualified name is present here, and the methods recorded for
//! a class are exactly the ones declared in its own body, so declaring-class
//! identity holds by construction.

mod builder;

pub use builder::{ParallelRegistryBuilder, RegistryBuilder};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Visibility modifier on a PHP class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn from_modifier(modifier: &str) -> Self {
        match modifier {
            "protected" => Visibility::Protected,
            "private" => Visibility::Private,
            _ => Visibility::Public, // PHP default is public
        }
    }
}

/// A method declared directly on a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Line of the method name token (1-indexed)
    pub line: usize,
}

/// A class declaration with its self-declared members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassModel {
    /// Fully qualified name, e.g. `App\Http\Controllers\HomeController`
    pub fqcn: String,

    /// Simple name, e.g. `HomeController`
    pub name: String,

    /// File the class is declared in
    pub file: PathBuf,

    /// Base class named in the `extends` clause, if any
    pub parent: Option<String>,

    /// Methods declared in this class's own body
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(fqcn: String, name: String, file: PathBuf) -> Self {
        Self {
            fqcn,
            name,
            file,
            parent: None,
            methods: Vec::new(),
        }
    }

    /// Public methods declared directly on this class, excluding the
    /// constructor. Inherited methods never appear because only the class
    /// body of the declaring file is read.
    pub fn self_declared_public_methods(&self) -> impl Iterator<Item = &MethodModel> {
        self.methods
            .iter()
            .filter(|m| m.visibility == Visibility::Public && m.name != "__construct")
    }
}

/// Symbol table mapping fully-qualified class names to their models
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassModel>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: ClassModel) {
        self.classes.insert(class.fqcn.clone(), class);
    }

    /// Resolve a fully-qualified class name, the `class_exists` analogue
    pub fn get(&self, fqcn: &str) -> Option<&ClassModel> {
        self.classes.get(fqcn)
    }

    pub fn contains(&self, fqcn: &str) -> bool {
        self.classes.contains_key(fqcn)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }
}
