//! File logging for `--debug` runs.
//!
//! Logs go to `<log_path>/event-filter.YYYY-MM-DD`, one file per day.
//! Files older than `log_retention_days` are pruned each time logging starts.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::OffsetTime};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// File name prefix of the daily log files.
const LOG_PREFIX: &str = "event-filter";

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// How long daily log files are kept.
pub fn retention(config: &Config) -> Duration {
    Duration::from_secs(config.log_retention_days.saturating_mul(SECS_PER_DAY))
}

/// Start file logging under `config.log_path`.
///
/// `RUST_LOG` directives are honoured; this crate logs at debug level otherwise.
pub fn init(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.log_path)
        .with_context(|| format!("Failed to create log directory: {}", config.log_path.display()))?;

    let pruned = prune_logs(&config.log_path, retention(config), SystemTime::now())?;

    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(
        local_offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );

    let filter = EnvFilter::from_default_env().add_directive(
        "event_filter=debug"
            .parse()
            .map_err(|e| anyhow!("Invalid log directive: {}", e))?,
    );

    let file_layer = fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &config.log_path,
            LOG_PREFIX,
        ))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(timer);

    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(filter).with(file_layer))
        .map_err(|e| anyhow!("Failed to set global subscriber: {}", e))?;

    info!(
        log_path = %config.log_path.display(),
        retention_days = config.log_retention_days,
        pruned,
        "Logging started"
    );

    Ok(())
}

/// Remove this crate's log files last modified before `now - retention`.
///
/// Returns the number of files removed. Other files in the directory are left alone.
pub fn prune_logs(log_dir: &Path, retention: Duration, now: SystemTime) -> Result<usize> {
    if !log_dir.is_dir() {
        return Ok(0);
    }

    let Some(cutoff) = now.checked_sub(retention) else {
        return Ok(0);
    };

    let mut removed = 0;
    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();

        let is_log = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_PREFIX));
        if !is_log {
            continue;
        }

        let expired = fs::metadata(&path)
            .and_then(|m| m.modified())
            .is_ok_and(|modified| modified < cutoff);
        if expired && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}
