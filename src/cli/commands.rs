use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fail fast when environment variables referenced by a project are missing
#[derive(Parser, Debug)]
#[command(
    name = "envguard",
    version,
    about = "Fail fast when environment variables referenced by a project are missing",
    long_about = "envguard scans configuration files for ${VAR} / ${VAR:default} \
                  interpolation and source files for getenv(\"VAR\") lookups, then \
                  verifies every referenced variable is set and non-blank in the \
                  current environment."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check that every referenced environment variable is set",
        long_about = "Scans the given paths (or the project's default source and resource \
                      roots) and fails when a referenced variable is unset or blank.\n\n\
                      Exit codes: 0 all set, 1 variables missing, 2 configuration or I/O error.\n\n\
                      Examples:\n  \
                      envguard check\n  \
                      envguard check src/main/resources --ignore LEGACY_VAR\n  \
                      envguard check --ignore-defaults --format json"
    )]
    Check(CheckArgs),

    #[command(
        about = "List referenced environment variables without checking them",
        long_about = "Prints every distinct variable referenced under the scan roots and \
                      whether all of its occurrences supply a default.\n\n\
                      Examples:\n  \
                      envguard scan\n  \
                      envguard scan config/ --format yaml"
    )]
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    #[arg(
        value_name = "PATHS",
        help = "Files or directories to scan (defaults to src/main/{resources,java,kotlin})"
    )]
    pub paths: Vec<PathBuf>,

    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        help = "Project directory the default scan roots are resolved against"
    )]
    pub project_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[arg(
        short = 'i',
        long = "ignore",
        value_name = "NAME",
        help = "Variable name to exempt from checking (repeatable)"
    )]
    pub ignore: Vec<String>,

    #[arg(
        long,
        help = "Exempt variables whose every reference supplies a default"
    )]
    pub ignore_defaults: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_check_defaults() {
        let args = CliArgs::try_parse_from(["envguard", "check"]).unwrap();
        match args.command {
            Commands::Check(check) => {
                assert!(check.scope.paths.is_empty());
                assert!(check.ignore.is_empty());
                assert!(!check.ignore_defaults);
                assert_eq!(check.scope.format, OutputFormatArg::Human);
            }
            other => panic!("Expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_options() {
        let args = CliArgs::try_parse_from([
            "envguard",
            "check",
            "config",
            "src/main/java",
            "--ignore",
            "LEGACY_VAR",
            "-i",
            "OLD_TOKEN",
            "--ignore-defaults",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Check(check) => {
                assert_eq!(
                    check.scope.paths,
                    vec![PathBuf::from("config"), PathBuf::from("src/main/java")]
                );
                assert_eq!(check.ignore, vec!["LEGACY_VAR", "OLD_TOKEN"]);
                assert!(check.ignore_defaults);
                assert_eq!(check.scope.format, OutputFormatArg::Json);
            }
            other => panic!("Expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["envguard", "-v", "-q", "scan"]).is_err());
    }

    #[test]
    fn test_parse_scan_project_dir() {
        let args = CliArgs::try_parse_from(["envguard", "scan", "-C", "service", "-f", "yaml"])
            .unwrap();
        match args.command {
            Commands::Scan(scan) => {
                assert_eq!(scan.scope.project_dir, Some(PathBuf::from("service")));
                assert_eq!(scan.scope.format, OutputFormatArg::Yaml);
            }
            other => panic!("Expected scan, got {:?}", other),
        }
    }
}
