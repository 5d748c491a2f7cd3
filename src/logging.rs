//! Logging configuration and initialization

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::error::{DashboardError, Result};

pub const LOG_FILE_PREFIX: &str = "dashboard.log";

/// Installs the file layer, plus a stdout layer outside production.
/// Development builds also record source locations. Keep the guard alive until exit.
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    let log_dir = &config.storage.logs_dir;
    std::fs::create_dir_all(log_dir).map_err(|e| DashboardError::io(log_dir, e))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let development = config.is_development();
    let stdout_layer = stdout_enabled(config).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter_for(&config.app.log_level))
        .with(stdout_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(false)
                .with_file(development)
                .with_line_number(development)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

/// Production runs without a console, so only the log file is written.
pub fn stdout_enabled(config: &AppConfig) -> bool {
    !config.is_production()
}

/// `RUST_LOG` wins; otherwise this crate logs at `level` and everything else at `warn`.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("api_compliance_dashboard={level},warn")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_invalid_level_falls_back() {
        // Must not panic on garbage input.
        let _ = filter_for("not a level ===");
    }

    #[test]
    fn test_stdout_disabled_in_production() {
        let mut config = AppConfig::default();
        assert!(stdout_enabled(&config));
        config.app.environment = "production".to_string();
        assert!(!stdout_enabled(&config));
    }

    #[test]
    fn test_filter_for_valid_level() {
        if std::env::var("RUST_LOG").is_err() {
            let filter = filter_for("debug");
            assert!(filter.to_string().contains("api_compliance_dashboard=debug"));
        }
    }
}
