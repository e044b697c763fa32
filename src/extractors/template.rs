//! `${NAME}` / `${NAME:default}` interpolation found in yml, yaml and
//! properties files

use super::{ReferenceExtractor, VariableReference};
use regex::Regex;

// The default never spans a line break, so an unterminated `${NAME:` cannot
// swallow a reference on a later line.
const TEMPLATE_PATTERN: &str = r"\$\{([A-Z0-9_]+)(:[^}\r\n]*)?\}";

pub struct TemplateExtractor {
    pattern: Regex,
}

impl TemplateExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TEMPLATE_PATTERN).expect("valid regex"),
        }
    }
}

impl Default for TemplateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor for TemplateExtractor {
    fn extract(&self, content: &str) -> Vec<VariableReference> {
        self.pattern
            .captures_iter(content)
            .filter_map(|cap| {
                let name = cap.get(1)?.as_str();
                Some(VariableReference::new(name, cap.get(2).is_some()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn extract(content: &str) -> Vec<VariableReference> {
        TemplateExtractor::new().extract(content)
    }

    #[parameterized(
        plain = { "${DATABASE_URL}", "DATABASE_URL", false },
        digits = { "${S3_BUCKET_2}", "S3_BUCKET_2", false },
        underscore_only = { "${_}", "_", false },
        with_default = { "${PORT:8080}", "PORT", true },
        empty_default = { "${PORT:}", "PORT", true },
        url_default = { "${DB_URL:jdbc:postgresql://localhost:5432/app}", "DB_URL", true },
        spaced_default = { "${GREETING:hello world}", "GREETING", true },
    )]
    fn test_single_reference(content: &str, name: &str, has_default: bool) {
        assert_eq!(extract(content), vec![VariableReference::new(name, has_default)]);
    }

    #[parameterized(
        lowercase = { "${database_url}" },
        mixed_case = { "${Database_Url}" },
        unterminated = { "url: ${DATABASE_URL" },
        unterminated_default = { "url: ${DATABASE_URL:localhost" },
        default_across_lines = { "url: ${DATABASE_URL:local\nhost}" },
        empty_name = { "${}" },
        no_dollar = { "{DATABASE_URL}" },
        dollar_only = { "$DATABASE_URL" },
        dotted_property = { "${spring.datasource.url}" },
    )]
    fn test_no_match(content: &str) {
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_multiple_references_in_order() {
        let yaml = r#"
spring:
  datasource:
    url: ${DATABASE_URL}
    username: ${DB_USER:postgres}
    password: ${DB_PASSWORD}
server:
  port: ${PORT:8080}
"#;
        assert_eq!(
            extract(yaml),
            vec![
                VariableReference::required("DATABASE_URL"),
                VariableReference::defaulted("DB_USER"),
                VariableReference::required("DB_PASSWORD"),
                VariableReference::defaulted("PORT"),
            ]
        );
    }

    #[test]
    fn test_properties_file() {
        let properties = "app.key=${API_KEY}\napp.timeout=${TIMEOUT:30}\n";
        assert_eq!(
            extract(properties),
            vec![
                VariableReference::required("API_KEY"),
                VariableReference::defaulted("TIMEOUT"),
            ]
        );
    }

    #[test]
    fn test_repeated_reference_is_returned_each_time() {
        assert_eq!(extract("${A} ${A}").len(), 2);
    }

    #[test]
    fn test_nested_default_stops_at_first_brace() {
        // The inner reference is swallowed by the outer default text.
        assert_eq!(
            extract("${PRIMARY:${FALLBACK}}"),
            vec![VariableReference::defaulted("PRIMARY")]
        );
    }

    #[test]
    fn test_unterminated_default_does_not_hide_later_reference() {
        assert_eq!(
            extract("a: ${BROKEN:\nb: ${GOOD}"),
            vec![VariableReference::required("GOOD")]
        );
        assert_eq!(
            extract("a=${BROKEN:x\r\nb=${GOOD:y}"),
            vec![VariableReference::defaulted("GOOD")]
        );
    }

    #[test]
    fn test_unterminated_does_not_hide_later_reference() {
        assert_eq!(
            extract("a: ${BROKEN\nb: ${GOOD}"),
            vec![VariableReference::required("GOOD")]
        );
    }
}
