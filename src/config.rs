use crate::environment::{Environment, ProcessEnvironment};
use crate::extractors::is_variable_name;
use crate::fs::FileSystem;
use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scanned when no roots are given, relative to the project directory.
pub const DEFAULT_SCAN_ROOTS: &[&str] = &["src/main/resources", "src/main/java", "src/main/kotlin"];

pub const SCAN_ROOTS_VAR: &str = "ENVGUARD_SCAN_ROOTS";
pub const IGNORE_VAR: &str = "ENVGUARD_IGNORE";
pub const IGNORE_DEFAULTS_VAR: &str = "ENVGUARD_IGNORE_DEFAULTS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No scan roots configured. Pass paths explicitly, set ENVGUARD_SCAN_ROOTS, or run from a project containing one of: src/main/resources, src/main/java, src/main/kotlin")]
    NoScanRoots,

    #[error("Scan root does not exist: {}", .0.display())]
    ScanRootNotFound(PathBuf),

    #[error("Invalid ignore name '{0}': variable names must match [A-Z0-9_]+")]
    InvalidIgnoreName(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Inputs of a single run. Built once, never mutated while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    scan_roots: Vec<PathBuf>,
    ignore_names: BTreeSet<String>,
    ignore_defaulted_vars: bool,
}

impl ValidationConfig {
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    /// Config scanning whichever of [`DEFAULT_SCAN_ROOTS`] exist under
    /// `project_dir`.
    pub fn for_project(project_dir: &Path, fs: &impl FileSystem) -> Self {
        Self::builder()
            .scan_roots(default_roots(project_dir, fs))
            .build()
    }

    pub fn scan_roots(&self) -> &[PathBuf] {
        &self.scan_roots
    }

    pub fn ignore_names(&self) -> &BTreeSet<String> {
        &self.ignore_names
    }

    pub fn ignore_defaulted_vars(&self) -> bool {
        self.ignore_defaulted_vars
    }

    pub fn validate(&self, fs: &impl FileSystem) -> Result<(), ConfigError> {
        if self.scan_roots.is_empty() {
            return Err(ConfigError::NoScanRoots);
        }

        if let Some(missing) = self.scan_roots.iter().find(|root| !fs.exists(root)) {
            return Err(ConfigError::ScanRootNotFound(missing.clone()));
        }

        // Names outside [A-Z0-9_]+ can never match a reference.
        if let Some(invalid) = self.ignore_names.iter().find(|n| !is_variable_name(n)) {
            return Err(ConfigError::InvalidIgnoreName(invalid.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationConfigBuilder {
    scan_roots: Vec<PathBuf>,
    ignore_names: BTreeSet<String>,
    ignore_defaulted_vars: bool,
}

impl ValidationConfigBuilder {
    pub fn scan_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if !self.scan_roots.contains(&root) {
            self.scan_roots.push(root);
        }
        self
    }

    pub fn scan_roots<I, P>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        roots.into_iter().fold(self, |builder, root| builder.scan_root(root))
    }

    pub fn ignore_name(mut self, name: impl Into<String>) -> Self {
        self.ignore_names.insert(name.into());
        self
    }

    pub fn ignore_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(self, |builder, name| builder.ignore_name(name))
    }

    pub fn ignore_defaulted_vars(mut self, ignore: bool) -> Self {
        self.ignore_defaulted_vars = ignore;
        self
    }

    pub fn build(self) -> ValidationConfig {
        ValidationConfig {
            scan_roots: self.scan_roots,
            ignore_names: self.ignore_names,
            ignore_defaulted_vars: self.ignore_defaulted_vars,
        }
    }
}

/// [`DEFAULT_SCAN_ROOTS`] under `project_dir` that exist.
pub fn default_roots(project_dir: &Path, fs: &impl FileSystem) -> Vec<PathBuf> {
    DEFAULT_SCAN_ROOTS
        .iter()
        .map(|root| project_dir.join(root))
        .filter(|root| fs.exists(root))
        .collect()
}

/// Settings supplied through `ENVGUARD_*` variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub scan_roots: Option<Vec<PathBuf>>,
    pub ignore_names: Vec<String>,
    pub ignore_defaulted_vars: Option<bool>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(&ProcessEnvironment::new())
    }

    pub fn from_environment(environment: &impl Environment) -> Result<Self, ConfigError> {
        let scan_roots = environment
            .var(SCAN_ROOTS_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                env::split_paths(&v)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect::<Vec<_>>()
            });

        let ignore_names = environment
            .var(IGNORE_VAR)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let ignore_defaulted_vars = environment
            .var(IGNORE_DEFAULTS_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_bool(IGNORE_DEFAULTS_VAR, &v))
            .transpose()?;

        Ok(Self {
            scan_roots,
            ignore_names,
            ignore_defaulted_vars,
        })
    }
}

pub fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::ParseError {
            field: field.to_string(),
            error: format!("expected true or false, got '{}'", other),
        }),
    }
}
