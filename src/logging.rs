//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Events go to stderr so they never mix with the plain renderer's stdout.
//! Priority for determining the level:
//! 1. `--quiet` (errors only)
//! 2. `--log-level`
//! 3. `CONTRACT_GRAPH_LOG` environment variable (e.g. "info", "debug")
//! 4. default to `warn`

use tracing::Level;

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "CONTRACT_GRAPH_LOG";

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(quiet: bool, cli_level: Option<LogLevel>) {
    let level = resolve_level(quiet, cli_level, std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[must_use]
pub fn resolve_level(quiet: bool, cli_level: Option<LogLevel>, env: Option<&str>) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match cli_level {
        Some(lvl) => level_from_log_level(lvl),
        None => env.and_then(parse_level_str).unwrap_or(Level::WARN),
    }
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
