//! Extension → dialect → extractor dispatch

use super::{LookupCallExtractor, ReferenceExtractor, TemplateExtractor, VariableReference};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Reference syntax a file is scanned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `${NAME}` / `${NAME:default}` interpolation
    Config,
    /// `getenv("NAME")` lookup calls
    Code,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Config => write!(f, "config"),
            Dialect::Code => write!(f, "code"),
        }
    }
}

pub struct DialectTable {
    extensions: HashMap<String, Dialect>,
    extractors: HashMap<Dialect, Box<dyn ReferenceExtractor>>,
}

impl DialectTable {
    /// A table with no extensions and no extractors registered.
    pub fn empty() -> Self {
        Self {
            extensions: HashMap::new(),
            extractors: HashMap::new(),
        }
    }

    /// Maps `extension` (without the dot, any case) to `dialect`.
    pub fn with_extension(mut self, extension: &str, dialect: Dialect) -> Self {
        self.extensions
            .insert(extension.to_ascii_lowercase(), dialect);
        self
    }

    pub fn with_extractor(mut self, dialect: Dialect, extractor: Box<dyn ReferenceExtractor>) -> Self {
        self.extractors.insert(dialect, extractor);
        self
    }

    /// Dialect for `path`, or `None` when the file should be skipped.
    pub fn dialect_for(&self, path: &Path) -> Option<Dialect> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        let dialect = *self.extensions.get(&extension)?;
        self.extractors.contains_key(&dialect).then_some(dialect)
    }

    pub fn extract(&self, dialect: Dialect, content: &str) -> Vec<VariableReference> {
        self.extractors
            .get(&dialect)
            .map(|extractor| extractor.extract(content))
            .unwrap_or_default()
    }
}

impl Default for DialectTable {
    fn default() -> Self {
        Self::empty()
            .with_extension("yml", Dialect::Config)
            .with_extension("yaml", Dialect::Config)
            .with_extension("properties", Dialect::Config)
            .with_extension("java", Dialect::Code)
            .with_extension("kt", Dialect::Code)
            .with_extractor(Dialect::Config, Box::new(TemplateExtractor::new()))
            .with_extractor(Dialect::Code, Box::new(LookupCallExtractor::new()))
    }
}
