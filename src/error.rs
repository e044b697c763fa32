use crate::config::ConfigError;
use crate::fs::WalkError;
use crate::report;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scan target could not be read. The run is aborted; no partial
    /// result is ever reported.
    #[error("Failed to read {}: {source}", .path.display())]
    ScanIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Carries every missing name, in discovery order.
    #[error("{}", report::failure_message(.missing))]
    MissingVariables { missing: Vec<String> },
}

impl From<WalkError> for ValidationError {
    fn from(err: WalkError) -> Self {
        ValidationError::ScanIo {
            path: err.path,
            source: err.source,
        }
    }
}

impl ValidationError {
    /// Names reported missing, empty for the other variants.
    pub fn missing(&self) -> &[String] {
        match self {
            ValidationError::MissingVariables { missing } => missing,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_error_becomes_scan_io() {
        let err: ValidationError = WalkError {
            path: PathBuf::from("/repo/src/main/resources"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        match err {
            ValidationError::ScanIo { path, source } => {
                assert_eq!(path, PathBuf::from("/repo/src/main/resources"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected ScanIo, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_io_message_names_the_file() {
        let err = ValidationError::ScanIo {
            path: PathBuf::from("config/application.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config/application.yml: Permission denied"
        );
    }

    #[test]
    fn test_missing_variables_message_lists_every_name() {
        let err = ValidationError::MissingVariables {
            missing: vec!["DATABASE_URL".to_string(), "API_KEY".to_string()],
        };
        let message = err.to_string();

        assert!(message.contains("  - DATABASE_URL"));
        assert!(message.contains("  - API_KEY"));
        assert_eq!(err.missing(), ["DATABASE_URL", "API_KEY"]);
    }

    #[test]
    fn test_missing_is_empty_for_other_errors() {
        let err = ValidationError::Config(ConfigError::NoScanRoots);
        assert!(err.missing().is_empty());
    }
}
