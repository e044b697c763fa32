use envguard::cli::{handle_check, handle_scan, CliArgs, Commands};
use envguard::util::logging::{init_logging, parse_level, LoggingConfig};
use envguard::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Check(check_args) => handle_check(check_args),
        Commands::Scan(scan_args) => handle_scan(scan_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}
