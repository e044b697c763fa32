pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CheckArgs, CliArgs, Commands, ScanArgs};
pub use handlers::{handle_check, handle_scan, EXIT_ERROR, EXIT_MISSING, EXIT_PASSED};
pub use output::{OutputFormat, OutputFormatter};
