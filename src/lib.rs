//! envguard - fail fast when referenced environment variables are missing
//!
//! envguard scans a project's configuration files for `${VAR}` and
//! `${VAR:default}` interpolation and its sources for `getenv("VAR")`
//! lookups, then verifies that every referenced variable is set to a
//! non-blank value in the running environment.
//!
//! # Example
//!
//! ```no_run
//! use envguard::{ValidationConfig, Validator};
//!
//! let config = ValidationConfig::builder()
//!     .scan_roots(["src/main/resources", "src/main/java"])
//!     .ignore_name("LEGACY_VAR")
//!     .ignore_defaulted_vars(true)
//!     .build();
//!
//! match Validator::from_config(config).enforce() {
//!     Ok(result) => println!("{}", result.message()),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`scanner`]: walks the scan roots and dispatches each file to the
//!   extractor for its [`Dialect`]
//! - [`aggregate`]: merges references across files
//! - [`filter`]: applies the ignore list and the ignore-defaulted rule
//! - [`checker`]: reads each remaining name from an [`Environment`]
//! - [`report`]: builds the [`ValidationResult`]

pub mod aggregate;
pub mod checker;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod fs;
pub mod report;
pub mod scanner;
pub mod util;
pub mod validator;

pub use aggregate::AggregatedReferences;
pub use checker::{CheckedVariable, EnvironmentChecker, VariableStatus};
pub use config::{ConfigError, EnvOverrides, ValidationConfig, ValidationConfigBuilder};
pub use environment::{Environment, ProcessEnvironment, StaticEnvironment};
pub use error::ValidationError;
pub use extractors::{Dialect, DialectTable, ReferenceExtractor, VariableReference};
pub use filter::IgnoreFilter;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem, WalkOptions};
pub use report::ValidationResult;
pub use scanner::{FileScanner, ScanOutput, ScanSummary, ScanTarget, ScannedFile};
pub use util::{init_from_env, init_logging, LoggingConfig};
pub use validator::Validator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Checks the real environment against `config`, failing with
/// [`ValidationError::MissingVariables`] when anything is missing.
pub fn validate(config: ValidationConfig) -> Result<ValidationResult, ValidationError> {
    Validator::from_config(config).enforce()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_envguard() {
        assert_eq!(NAME, "envguard");
    }
}
