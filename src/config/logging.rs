//! Logging setup
//!
//! Structured logs through `tracing`. The filter comes from `SMART_BUDGET_LOG`
//! when set, otherwise from the configured log level. The TUI logs to a file
//! so the terminal screen stays intact.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::settings::Settings;
use crate::error::BudgetError;

/// Environment variable holding a log filter directive
pub const LOG_ENV_VAR: &str = "SMART_BUDGET_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter for a configured level
///
/// A bare level such as `debug` applies to this crate only; anything else is
/// taken as a full filter directive.
pub fn build_filter(level: &str) -> Result<EnvFilter, BudgetError> {
    let level = level.trim();
    let directive = if level.is_empty() {
        "smart_budget=warn".to_string()
    } else if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("smart_budget={}", level)
    };
    EnvFilter::try_new(&directive)
        .map_err(|e| BudgetError::Config(format!("Invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber
pub fn init_logging(settings: &Settings, target: LogTarget) -> Result<(), BudgetError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => build_filter(&settings.log_level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_is_scoped_to_crate() {
        let filter = build_filter("debug").unwrap();
        assert_eq!(filter.to_string(), "smart_budget=debug");
    }

    #[test]
    fn test_full_directive_passes_through() {
        let filter = build_filter("info,smart_budget=trace").unwrap();
        assert!(filter.to_string().contains("smart_budget=trace"));
    }

    #[test]
    fn test_empty_level_defaults_to_warn() {
        assert_eq!(build_filter("  ").unwrap().to_string(), "smart_budget=warn");
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(
            build_filter("smart_budget=loud"),
            Err(BudgetError::Config(_))
        ));
    }
}
