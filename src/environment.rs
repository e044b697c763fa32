//! Read-only access to environment variables
//!
//! The checker never calls `std::env` directly; it asks an [`Environment`].
//! [`ProcessEnvironment`] answers from the running process and
//! [`StaticEnvironment`] from a fixed map, so tests never have to mutate
//! process-wide state.

use std::collections::HashMap;
use std::env;

/// Point-in-time lookup of a single variable.
pub trait Environment: Send + Sync {
    /// Returns the variable's value, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // A non-UTF-8 value is still a value; only its blankness matters.
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// A fixed set of variables.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<T: Environment + ?Sized> Environment for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
