use crate::cli::commands::{CheckArgs, ScanArgs, ScopeArgs};
use crate::cli::output::OutputFormatter;
use crate::config::{default_roots, ConfigError, EnvOverrides, ValidationConfig};
use crate::error::ValidationError;
use crate::fs::RealFileSystem;
use crate::validator::Validator;
use std::env;
use std::path::PathBuf;
use tracing::{debug, error, info};

pub const EXIT_PASSED: i32 = 0;
pub const EXIT_MISSING: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Merges command-line arguments with `ENVGUARD_*` overrides.
///
/// Roots come from the command line, else `ENVGUARD_SCAN_ROOTS`, else the
/// default roots that exist under the project directory. Ignore names from
/// both sources are combined; `--ignore-defaults` wins over the variable.
pub fn resolve_config(
    scope: &ScopeArgs,
    ignore: &[String],
    ignore_defaults: bool,
    overrides: EnvOverrides,
) -> ValidationConfig {
    let roots = if !scope.paths.is_empty() {
        debug!(roots = ?scope.paths, "Using scan roots from command line");
        scope.paths.clone()
    } else if let Some(roots) = overrides.scan_roots {
        debug!(roots = ?roots, "Using scan roots from environment");
        roots
    } else {
        let project_dir = match &scope.project_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        let roots = default_roots(&project_dir, &RealFileSystem::new());
        debug!(project_dir = %project_dir.display(), roots = ?roots, "Using default scan roots");
        roots
    };

    ValidationConfig::builder()
        .scan_roots(roots)
        .ignore_names(ignore.iter().cloned())
        .ignore_names(overrides.ignore_names)
        .ignore_defaulted_vars(ignore_defaults || overrides.ignore_defaulted_vars.unwrap_or(false))
        .build()
}

fn load_config(
    scope: &ScopeArgs,
    ignore: &[String],
    ignore_defaults: bool,
) -> Result<ValidationConfig, ConfigError> {
    let overrides = EnvOverrides::from_env()?;
    Ok(resolve_config(scope, ignore, ignore_defaults, overrides))
}

fn exit_code_for(err: &ValidationError) -> i32 {
    match err {
        ValidationError::MissingVariables { .. } => EXIT_MISSING,
        ValidationError::Config(_) | ValidationError::ScanIo { .. } => EXIT_ERROR,
    }
}

pub fn handle_check(args: &CheckArgs) -> i32 {
    let config = match load_config(&args.scope, &args.ignore, args.ignore_defaults) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    info!(
        roots = config.scan_roots().len(),
        ignored = config.ignore_names().len(),
        ignore_defaults = config.ignore_defaulted_vars(),
        "Starting environment check"
    );

    let result = match Validator::from_config(config).run() {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return exit_code_for(&e);
        }
    };

    let formatter = OutputFormatter::new(args.scope.format.into());
    match formatter.format_result(&result) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Failed to format output: {}", e);
            return EXIT_ERROR;
        }
    }

    if result.passed() {
        EXIT_PASSED
    } else {
        EXIT_MISSING
    }
}

pub fn handle_scan(args: &ScanArgs) -> i32 {
    let config = match load_config(&args.scope, &[], false) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let references = match Validator::from_config(config).references() {
        Ok(references) => references,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return exit_code_for(&e);
        }
    };

    let formatter = OutputFormatter::new(args.scope.format.into());
    match formatter.format_references(&references) {
        Ok(output) => {
            println!("{}", output);
            EXIT_PASSED
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            EXIT_ERROR
        }
    }
}
