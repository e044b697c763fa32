//! Structured logging setup
//!
//! Logs go to stderr through a `tracing` subscriber so the report on stdout
//! stays clean for tooling that parses it. `RUST_LOG`, when set, takes
//! precedence over the configured level.
//!
//! ```no_run
//! use envguard::util::logging;
//!
//! logging::init_from_env();
//! tracing::info!(roots = 2, "Starting reference scan");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVEL_VAR: &str = "ENVGUARD_LOG_LEVEL";
pub const LOG_JSON_VAR: &str = "ENVGUARD_LOG_JSON";

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `ENVGUARD_LOG_LEVEL` and `ENVGUARD_LOG_JSON`.
    pub fn from_env() -> Self {
        let level = env::var(LOG_LEVEL_VAR)
            .map(|v| parse_level(&v))
            .unwrap_or(Level::WARN);

        let use_json = env::var(LOG_JSON_VAR)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self { level, use_json }
    }
}

/// Parses a log level, falling back to `WARN` for unknown input.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let directive = format!("envguard={}", level);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes the subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .init();
        }
    });
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
