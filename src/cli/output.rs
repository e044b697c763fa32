//! Output formatting for validation results and reference listings

use anyhow::{Context, Result};
use serde::Serialize;

use crate::aggregate::AggregatedReferences;
use crate::extractors::VariableReference;
use crate::report::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The plain report text
    Human,
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_result(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(result.message()),
            OutputFormat::Json => self.to_json(result),
            OutputFormat::Yaml => self.to_yaml(result),
        }
    }

    pub fn format_references(&self, references: &AggregatedReferences) -> Result<String> {
        let entries = references.to_references();
        match self.format {
            OutputFormat::Human => Ok(Self::references_human(&entries)),
            OutputFormat::Json => self.to_json(&entries),
            OutputFormat::Yaml => self.to_yaml(&entries),
        }
    }

    fn references_human(entries: &[VariableReference]) -> String {
        if entries.is_empty() {
            return "No environment variable references found.".to_string();
        }

        entries
            .iter()
            .map(|r| {
                if r.has_default {
                    format!("{} (default)", r.name)
                } else {
                    r.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")
    }

    fn to_yaml<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let yaml = serde_yaml::to_string(value).context("Failed to serialize output to YAML")?;
        Ok(yaml.trim_end().to_string())
    }
}
