//! `getenv("NAME")` lookup calls found in java and kt sources

use super::{ReferenceExtractor, VariableReference};
use regex::Regex;

const LOOKUP_PATTERN: &str = r#"\bgetenv\(\s*(?:"([A-Z0-9_]+)"|'([A-Z0-9_]+)')\s*\)"#;

/// Only literal names are visible; `getenv(prefix + "_URL")` is not.
pub struct LookupCallExtractor {
    pattern: Regex,
}

impl LookupCallExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LOOKUP_PATTERN).expect("valid regex"),
        }
    }
}

impl Default for LookupCallExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor for LookupCallExtractor {
    fn extract(&self, content: &str) -> Vec<VariableReference> {
        self.pattern
            .captures_iter(content)
            .filter_map(|cap| {
                let name = cap.get(1).or_else(|| cap.get(2))?;
                Some(VariableReference::required(name.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn names(content: &str) -> Vec<String> {
        LookupCallExtractor::new()
            .extract(content)
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[parameterized(
        java = { r#"String key = System.getenv("API_KEY");"#, "API_KEY" },
        kotlin = { r#"val key = System.getenv("API_KEY")"#, "API_KEY" },
        bare = { r#"getenv("API_KEY")"#, "API_KEY" },
        single_quotes = { "getenv('API_KEY')", "API_KEY" },
        padded = { r#"System.getenv( "API_KEY" )"#, "API_KEY" },
        digits = { r#"System.getenv("OAUTH2_CLIENT_1")"#, "OAUTH2_CLIENT_1" },
    )]
    fn test_detects_literal_lookup(content: &str, expected: &str) {
        assert_eq!(names(content), vec![expected.to_string()]);
    }

    #[parameterized(
        computed = { r#"System.getenv(prefix + "_URL")"# },
        variable = { "System.getenv(name)" },
        lowercase = { r#"System.getenv("api_key")"# },
        mismatched_quotes = { r#"System.getenv("API_KEY')"# },
        no_arguments = { "System.getenv()" },
        other_call = { r#"System.getProperty("API_KEY")"# },
        suffixed_name = { r#"mygetenv("API_KEY")"# },
        template_syntax = { "${API_KEY}" },
    )]
    fn test_ignores(content: &str) {
        assert!(names(content).is_empty());
    }

    #[test]
    fn test_lookup_references_never_carry_defaults() {
        let refs = LookupCallExtractor::new().extract(
            r#"String port = Optional.ofNullable(System.getenv("PORT")).orElse("8080");"#,
        );
        assert_eq!(refs, vec![VariableReference::required("PORT")]);
    }

    #[test]
    fn test_multiple_calls_in_order() {
        let source = r#"
public class Config {
    private final String db = System.getenv("DATABASE_URL");
    private final String key = System.getenv('API_KEY');
    private final String again = System.getenv("DATABASE_URL");
}
"#;
        assert_eq!(names(source), vec!["DATABASE_URL", "API_KEY", "DATABASE_URL"]);
    }
}
