//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so logs go to daily rotating files only:
//! `<log_dir>/booking.YYYY-MM-DD.log`, deleted after 14 days.

use chrono::{Duration, Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PREFIX: &str = "booking";
const LOG_SUFFIX: &str = "log";
const RETENTION_DAYS: i64 = 14;

/// Initialize file logging
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logger(level: &str, json_format: bool, log_dir: &Path) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(log_dir)?;
    let writer = std::sync::Mutex::new(appender);

    let subscriber = tracing_subscriber::registry().with(env_filter);
    if json_format {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer);
        subscriber.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer);
        subscriber.with(layer).try_init()?;
    }

    Ok(())
}

/// Clean up log files older than 14 days
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = Local::now().date_naive() - Duration::days(RETENTION_DAYS);
    cleanup_logs_before(log_dir, cutoff)
}

/// Delete `booking.YYYY-MM-DD.log` files dated before `cutoff`, returning how many went
pub fn cleanup_logs_before(log_dir: &Path, cutoff: NaiveDate) -> anyhow::Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date) = log_file_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

fn log_file_date(name: &str) -> Option<NaiveDate> {
    let date_part = name
        .strip_prefix(LOG_PREFIX)?
        .strip_prefix('.')?
        .strip_suffix(LOG_SUFFIX)?
        .strip_suffix('.')?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
