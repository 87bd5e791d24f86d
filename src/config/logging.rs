//! Tracing setup
//!
//! Log filtering comes from `BUDGET_BRAIN_LOG` (falling back to `RUST_LOG`),
//! otherwise from the default level passed in. Command-line runs log to
//! stderr; the TUI logs to a file so output never lands on the screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGET_BRAIN_LOG";

/// Name of the log file used in TUI mode
pub const LOG_FILE: &str = "budget-brain.log";

static TRACING_INIT: Once = Once::new();

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("budget_brain={}", default_level)))
}

/// Install the global subscriber once; later calls are ignored
pub fn init_tracing(target: LogTarget<'_>, default_level: &str) -> BudgetResult<()> {
    let mut result = Ok(());

    TRACING_INIT.call_once(|| {
        let filter = build_filter(default_level);
        result = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e))),
            LogTarget::File(dir) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE))
                .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))
                .and_then(|file| {
                    fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init()
                        .map_err(|e| {
                            BudgetError::Config(format!("Failed to initialize logging: {}", e))
                        })
                }),
        };
    });

    if result.is_ok() {
        tracing::debug!("tracing initialized");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init_tracing(LogTarget::Stderr, "warn");
        let second = init_tracing(LogTarget::Stderr, "warn");
        // A test harness may already own the global subscriber
        assert!(first.is_ok() || matches!(first, Err(BudgetError::Config(_))));
        assert!(second.is_ok());
    }
}
