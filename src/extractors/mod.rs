// Variable reference extraction
//
// Each dialect has one extractor that turns raw file text into the
// environment variable references it contains. Extractors are total: text
// they don't understand is ignored, never reported as an error.

pub mod dialect;
pub mod lookup;
pub mod template;

pub use dialect::{Dialect, DialectTable};
pub use lookup::LookupCallExtractor;
pub use template::TemplateExtractor;

use serde::Serialize;

/// One occurrence of a variable name in scanned text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VariableReference {
    pub name: String,
    /// Only template references with a `:default` clause set this.
    pub has_default: bool,
}

impl VariableReference {
    pub fn new(name: impl Into<String>, has_default: bool) -> Self {
        Self {
            name: name.into(),
            has_default,
        }
    }

    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn defaulted(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

/// Extraction strategy for a single dialect
pub trait ReferenceExtractor: Send + Sync {
    /// Returns references in the order they appear in `content`.
    fn extract(&self, content: &str) -> Vec<VariableReference>;
}

/// True if `name` matches `[A-Z0-9_]+`, the only names either dialect
/// can report.
pub fn is_variable_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_variable_name() {
        assert!(is_variable_name("DATABASE_URL"));
        assert!(is_variable_name("S3_BUCKET_2"));
        assert!(is_variable_name("_"));
        assert!(!is_variable_name(""));
        assert!(!is_variable_name("database_url"));
        assert!(!is_variable_name("DATABASE-URL"));
        assert!(!is_variable_name("ÄPFEL"));
    }
}
