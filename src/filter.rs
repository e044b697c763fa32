use crate::aggregate::AggregatedReferences;
use crate::config::ValidationConfig;
use std::collections::BTreeSet;
use tracing::debug;

/// Drops names the user exempted from checking.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    ignore_names: BTreeSet<String>,
    ignore_defaulted_vars: bool,
}

impl IgnoreFilter {
    pub fn new(ignore_names: BTreeSet<String>, ignore_defaulted_vars: bool) -> Self {
        Self {
            ignore_names,
            ignore_defaulted_vars,
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.ignore_names().clone(), config.ignore_defaulted_vars())
    }

    /// Exact, case-sensitive match on the ignore list, or a name whose every
    /// occurrence had a default while defaulted names are ignored.
    pub fn is_exempt(&self, name: &str, defaulted: bool) -> bool {
        self.ignore_names.contains(name) || (self.ignore_defaulted_vars && defaulted)
    }

    /// The to-check set, in discovery order.
    pub fn apply(&self, references: &AggregatedReferences) -> Vec<String> {
        references
            .iter()
            .filter(|&(name, defaulted)| {
                let exempt = self.is_exempt(name, defaulted);
                if exempt {
                    debug!(name, defaulted, "Variable exempt from checking");
                }
                !exempt
            })
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
