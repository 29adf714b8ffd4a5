//! Tracing setup.
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs to
//! a daily file under `${SIGNUP_HOME}/logs` instead.
//!
//! Filter: `SIGNUP_LOG`, then `RUST_LOG`, then the caller's default.
//! `LOG_FORMAT=json` switches either sink to JSON lines.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "SIGNUP_LOG";
const LOG_FILE_PREFIX: &str = "signup.log";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

fn json_requested() -> bool {
    matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

/// Installs a stderr subscriber for CLI commands.
///
/// Does nothing if a global subscriber is already set.
pub fn init_stderr(default_filter: &str) {
    let filter = env_filter(default_filter);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = if json_requested() {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Installs a non-blocking daily-rotated file subscriber for the TUI.
///
/// Keep the returned guard alive for the TUI lifetime; dropping it flushes
/// buffered lines.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_file(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = env_filter(default_filter);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer);

    let _ = if json_requested() {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "panic");
        original_hook(info);
    }));

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_file_creates_log_dir() {
        let dir = tempdir().unwrap();
        let logs = dir.path().join("logs");
        let _guard = init_file(&logs, "info").unwrap();
        assert!(logs.is_dir());
    }
}
