//! Cross-file merge of variable references

use crate::extractors::VariableReference;
use indexmap::IndexMap;

/// Distinct variable names in first-discovery order.
///
/// A name counts as defaulted only while every occurrence seen so far
/// carried a default. One occurrence without a default makes it required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedReferences {
    entries: IndexMap<String, bool>,
}

impl AggregatedReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, reference: &VariableReference) {
        self.entries
            .entry(reference.name.clone())
            .and_modify(|defaulted| *defaulted &= reference.has_default)
            .or_insert(reference.has_default);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether every occurrence of `name` carried a default.
    pub fn is_defaulted(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    /// `(name, every occurrence defaulted)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), *d))
    }

    /// One merged reference per name, in discovery order.
    pub fn to_references(&self) -> Vec<VariableReference> {
        self.iter()
            .map(|(name, defaulted)| VariableReference::new(name, defaulted))
            .collect()
    }
}

impl<'a> Extend<&'a VariableReference> for AggregatedReferences {
    fn extend<I: IntoIterator<Item = &'a VariableReference>>(&mut self, iter: I) {
        for reference in iter {
            self.add(reference);
        }
    }
}

impl<'a> FromIterator<&'a VariableReference> for AggregatedReferences {
    fn from_iter<I: IntoIterator<Item = &'a VariableReference>>(iter: I) -> Self {
        let mut aggregated = Self::new();
        aggregated.extend(iter);
        aggregated
    }
}
