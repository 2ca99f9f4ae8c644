//! Logging system initialization

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::StaticConfig;
use crate::errors::{DotPlaceError, Result};

const DEFAULT_LOG_FILE: &str = "dotplace.log";

/// Installs the global tracing subscriber described by `[logging]`
///
/// - `file` unset or empty: stdout with ANSI colors
/// - `file` set with `enable_rotation`: daily rolling files, `max_backups` kept
/// - `file` set without rotation: appended to one file
///
/// The returned guard must stay alive until exit so buffered lines are
/// flushed. Fails if the log file cannot be opened or a subscriber is already
/// installed.
pub fn init_logging(config: &StaticConfig) -> Result<WorkerGuard> {
    let logging = &config.logging;
    let log_file = logging.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if logging.enable_rotation => {
            let path = std::path::Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(logging.max_backups.max(1))
                .build(dir)
                .map_err(|e| {
                    DotPlaceError::file_operation(format!(
                        "Failed to create rolling log appender in {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|e| {
                    DotPlaceError::file_operation(format!(
                        "Failed to open log file {}: {}",
                        log_file, e
                    ))
                })?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if logging.format.eq_ignore_ascii_case("json") {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| DotPlaceError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}
