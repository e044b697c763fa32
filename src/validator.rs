//! Runs the scan → aggregate → filter → check → report pipeline once

use crate::aggregate::AggregatedReferences;
use crate::checker::EnvironmentChecker;
use crate::config::ValidationConfig;
use crate::environment::{Environment, ProcessEnvironment};
use crate::error::ValidationError;
use crate::extractors::DialectTable;
use crate::filter::IgnoreFilter;
use crate::fs::{FileSystem, RealFileSystem, WalkOptions};
use crate::report::ValidationResult;
use crate::scanner::FileScanner;
use tracing::{info, warn};

pub struct Validator<F: FileSystem, E: Environment> {
    config: ValidationConfig,
    scanner: FileScanner<F>,
    checker: EnvironmentChecker<E>,
}

impl Validator<RealFileSystem, ProcessEnvironment> {
    /// Validator over the real file system and process environment.
    pub fn from_config(config: ValidationConfig) -> Self {
        Self::new(config, RealFileSystem::new(), ProcessEnvironment::new())
    }
}

impl<F: FileSystem, E: Environment> Validator<F, E> {
    pub fn new(config: ValidationConfig, fs: F, environment: E) -> Self {
        Self {
            config,
            scanner: FileScanner::new(fs),
            checker: EnvironmentChecker::new(environment),
        }
    }

    pub fn with_dialects(mut self, dialects: DialectTable) -> Self {
        self.scanner = self.scanner.with_dialects(dialects);
        self
    }

    pub fn with_walk_options(mut self, options: WalkOptions) -> Self {
        self.scanner = self.scanner.with_walk_options(options);
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Every distinct reference under the scan roots, before filtering.
    pub fn references(&self) -> Result<AggregatedReferences, ValidationError> {
        self.config.validate(self.scanner.file_system())?;

        let output = self.scanner.scan(self.config.scan_roots())?;
        Ok(output.references().collect())
    }

    /// Runs the pipeline. Missing variables are reported in the result, not
    /// as an error; only configuration and I/O problems fail the run.
    pub fn run(&self) -> Result<ValidationResult, ValidationError> {
        let references = self.references()?;
        let to_check = IgnoreFilter::from_config(&self.config).apply(&references);

        info!(
            distinct = references.len(),
            to_check = to_check.len(),
            "Checking environment"
        );

        let checked = self.checker.check(&to_check);
        let result = ValidationResult::from_checks(&checked);

        if result.passed() {
            info!(scanned_count = result.scanned_count(), "All variables set");
        } else {
            warn!(
                missing = ?result.missing(),
                scanned_count = result.scanned_count(),
                "Missing environment variables"
            );
        }

        Ok(result)
    }

    /// Like [`run`](Self::run), but a failed result becomes
    /// [`ValidationError::MissingVariables`] carrying every missing name.
    pub fn enforce(&self) -> Result<ValidationResult, ValidationError> {
        self.run()?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::environment::StaticEnvironment;
    use crate::fs::MockFileSystem;

    fn project() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file(
            "src/main/resources/application.yml",
            "db: ${DATABASE_URL}\nport: ${PORT:8080}\n",
        );
        fs.add_file(
            "src/main/java/App.java",
            r#"String key = System.getenv("API_KEY");"#,
        );
        fs
    }

    fn config() -> ValidationConfig {
        ValidationConfig::builder()
            .scan_roots(["src/main/resources", "src/main/java"])
            .build()
    }

    #[test]
    fn test_run_reports_missing_in_discovery_order() {
        let fs = project();
        let validator = Validator::new(config(), &fs, StaticEnvironment::new());

        let result = validator.run().unwrap();
        assert!(!result.passed());
        assert_eq!(result.scanned_count(), 3);
        assert_eq!(result.missing(), ["DATABASE_URL", "PORT", "API_KEY"]);
    }

    #[test]
    fn test_run_passes_when_everything_is_set() {
        let fs = project();
        let environment: StaticEnvironment = [
            ("DATABASE_URL", "postgres://db"),
            ("PORT", "80"),
            ("API_KEY", "secret"),
        ]
        .into_iter()
        .collect();
        let validator = Validator::new(config(), &fs, environment);

        let result = validator.enforce().unwrap();
        assert!(result.passed());
        assert_eq!(result.scanned_count(), 3);
    }

    #[test]
    fn test_enforce_carries_full_missing_list() {
        let fs = project();
        let config = ValidationConfig::builder()
            .scan_roots(["src/main/resources", "src/main/java"])
            .ignore_defaulted_vars(true)
            .build();
        let validator = Validator::new(config, &fs, StaticEnvironment::new());

        let err = validator.enforce().unwrap_err();
        assert_eq!(err.missing(), ["DATABASE_URL", "API_KEY"]);
    }

    #[test]
    fn test_config_error_before_scanning() {
        let fs = project();
        fs.add_unreadable_file("src/main/resources/broken.yml");
        let config = ValidationConfig::builder()
            .scan_roots(["src/main/resources", "does/not/exist"])
            .build();
        let validator = Validator::new(config, &fs, StaticEnvironment::new());

        match validator.run() {
            Err(ValidationError::Config(ConfigError::ScanRootNotFound(path))) => {
                assert_eq!(path, std::path::PathBuf::from("does/not/exist"));
            }
            other => panic!("Expected ScanRootNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_references_are_unfiltered() {
        let fs = project();
        let config = ValidationConfig::builder()
            .scan_roots(["src/main/resources", "src/main/java"])
            .ignore_name("API_KEY")
            .ignore_defaulted_vars(true)
            .build();
        let validator = Validator::new(config, &fs, StaticEnvironment::new());

        let references = validator.references().unwrap();
        assert_eq!(references.len(), 3);
        assert_eq!(references.is_defaulted("PORT"), Some(true));
    }

    #[test]
    fn test_custom_dialect_table() {
        let fs = MockFileSystem::new();
        fs.add_file("conf/app.conf", "${CUSTOM}");
        let config = ValidationConfig::builder().scan_root("conf").build();
        let validator = Validator::new(config, &fs, StaticEnvironment::new()).with_dialects(
            DialectTable::default().with_extension("conf", crate::extractors::Dialect::Config),
        );

        let result = validator.run().unwrap();
        assert_eq!(result.missing(), ["CUSTOM"]);
    }
}
