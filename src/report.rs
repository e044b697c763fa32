//! Pass/fail result of a run and its text form
//!
//! The failure text is one header line followed by one `  - NAME` line per
//! missing variable, so downstream tooling can grep it line by line.

use crate::checker::CheckedVariable;
use crate::error::ValidationError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    scanned_count: usize,
    missing: Vec<String>,
    passed: bool,
}

impl ValidationResult {
    pub fn new(scanned_count: usize, missing: Vec<String>) -> Self {
        let passed = missing.is_empty();
        Self {
            scanned_count,
            missing,
            passed,
        }
    }

    /// Builds the result from checker findings, which arrive in discovery
    /// order.
    pub fn from_checks(checked: &[CheckedVariable]) -> Self {
        let missing = checked
            .iter()
            .filter(|c| c.status.is_missing())
            .map(|c| c.name.clone())
            .collect();
        Self::new(checked.len(), missing)
    }

    /// Number of distinct variables checked after filtering.
    pub fn scanned_count(&self) -> usize {
        self.scanned_count
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn message(&self) -> String {
        if self.passed {
            success_message(self.scanned_count)
        } else {
            failure_message(&self.missing)
        }
    }

    /// Turns a failed result into [`ValidationError::MissingVariables`].
    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.passed {
            Ok(self)
        } else {
            Err(ValidationError::MissingVariables {
                missing: self.missing,
            })
        }
    }
}

pub fn success_message(scanned_count: usize) -> String {
    format!(
        "All {} environment variable(s) referenced in the project are set.",
        scanned_count
    )
}

pub fn failure_message(missing: &[String]) -> String {
    let mut message = format!("Missing required environment variables ({}):", missing.len());
    for name in missing {
        message.push_str("\n  - ");
        message.push_str(name);
    }
    message
}
