//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Rolling log file prefix
const LOG_FILE_PREFIX: &str = "menu-engine";

/// Initialize the logger
pub fn init_logger() -> bool {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional JSON output and file output
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` when a global
/// subscriber was already installed, so calling this twice is harmless.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // File output only when the directory already exists
    let appender = log_dir
        .map(Path::new)
        .filter(|p| p.is_dir())
        .map(|p| tracing_appender::rolling::daily(p, LOG_FILE_PREFIX));

    let result = match (json.unwrap_or(false), appender) {
        (true, Some(file)) => builder.json().with_writer(file).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(file)) => builder.with_ansi(false).with_writer(file).try_init(),
        (false, None) => builder.try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let _ = init_logger_with_file(Some("debug"), Some(false), dir.path().to_str());
        tracing::info!("logger initialized");

        // A second global subscriber is refused, not a panic
        assert!(!init_logger());
    }
}
