//! Logging configuration using tracing

use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "GATEHOUSE_LOG";

const LOG_FILE_NAME: &str = "gatehouse.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gatehouse/logs/` because the
/// terminal UI owns stdout. Log level is controlled by `GATEHOUSE_LOG`.
///
/// # Examples
/// ```bash
/// GATEHOUSE_LOG=debug gatehouse
/// GATEHOUSE_LOG=gatehouse_app=trace gatehouse --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir).context("creating log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Gatehouse starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Filter used when `GATEHOUSE_LOG` is unset or unparsable
pub fn default_filter() -> &'static str {
    "gatehouse=info,warn"
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("gatehouse").join("logs")
}

/// Path of today's log file
///
/// Daily rotation names files `gatehouse.log.YYYY-MM-DD`, dated in UTC.
pub fn get_current_log_file() -> PathBuf {
    log_file_for(Utc::now().date_naive())
}

fn log_file_for(date: NaiveDate) -> PathBuf {
    get_log_directory().join(format!("{}.{}", LOG_FILE_NAME, date.format("%Y-%m-%d")))
}
