use crate::environment::Environment;
use serde::Serialize;
use tracing::debug;

/// What the environment holds for a variable at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableStatus {
    Present,
    /// Set, but empty or whitespace only.
    Blank,
    Absent,
}

impl VariableStatus {
    pub fn classify(value: Option<&str>) -> Self {
        match value {
            None => VariableStatus::Absent,
            Some(v) if v.trim().is_empty() => VariableStatus::Blank,
            Some(_) => VariableStatus::Present,
        }
    }

    /// A blank value is as unusable as no value at all.
    pub fn is_missing(self) -> bool {
        !matches!(self, VariableStatus::Present)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedVariable {
    pub name: String,
    pub status: VariableStatus,
}

pub struct EnvironmentChecker<E: Environment> {
    environment: E,
}

impl<E: Environment> EnvironmentChecker<E> {
    pub fn new(environment: E) -> Self {
        Self { environment }
    }

    /// Single point-in-time read; nothing is cached between calls.
    pub fn status(&self, name: &str) -> VariableStatus {
        let value = self.environment.var(name);
        VariableStatus::classify(value.as_deref())
    }

    /// Checks `names` in order; the output keeps that order.
    pub fn check(&self, names: &[String]) -> Vec<CheckedVariable> {
        names
            .iter()
            .map(|name| {
                let status = self.status(name);
                debug!(name = %name, status = ?status, "Checked variable");
                CheckedVariable {
                    name: name.clone(),
                    status,
                }
            })
            .collect()
    }
}
