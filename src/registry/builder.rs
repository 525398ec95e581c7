// Sequential and parallel registry builders

use super::ClassRegistry;
use crate::discovery::SourceFile;
use crate::parser::{Parser as SourceParser, PhpParser};
use miette::Result;
use rayon::prelude::*;
use tracing::{debug, info};

/// Builder for constructing the class registry one file at a time
pub struct RegistryBuilder {
    registry: ClassRegistry,
    parser: PhpParser,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            registry: ClassRegistry::new(),
            parser: PhpParser::new(),
        }
    }

    /// Parse a source file and add its classes to the registry
    pub fn process_file(&mut self, file: &SourceFile) -> Result<()> {
        let contents = file.read_contents()?;
        let result = self.parser.parse(&file.path, &contents)?;

        for class in result.classes {
            self.registry.insert(class);
        }

        Ok(())
    }

    pub fn build(self) -> ClassRegistry {
        self.registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel registry builder for faster processing
pub struct ParallelRegistryBuilder;

impl ParallelRegistryBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the registry from source files using parallel parsing.
    ///
    /// Produces the same registry as the sequential builder; per-file parse
    /// failures are skipped, not fatal.
    pub fn build_from_files(&self, files: &[SourceFile]) -> Result<ClassRegistry> {
        info!("Parsing {} handler files in parallel...", files.len());

        let results: Vec<Result<crate::parser::ParseResult>> = files
            .par_iter()
            .map(|file| {
                let parser = PhpParser::new();
                let contents = file.read_contents()?;
                parser.parse(&file.path, &contents)
            })
            .collect();

        let mut registry = ClassRegistry::new();
        for result in results {
            match result {
                Ok(parsed) => {
                    for class in parsed.classes {
                        registry.insert(class);
                    }
                }
                Err(e) => {
                    debug!("Parse error (continuing): {}", e);
                }
            }
        }

        info!("Registry holds {} classes", registry.len());
        Ok(registry)
    }
}

impl Default for ParallelRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
