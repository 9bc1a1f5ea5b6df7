//! Logging system initialization
//!
//! Wires tracing output (console or file, optionally rotated) from the
//! `[logging]` configuration section.

use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LoggingConfig};

/// Initialize the logging system based on configuration.
///
/// Call once during application startup, after the configuration has been
/// loaded.  The returned `WorkerGuard` must be kept alive for the duration
/// of the program so non-blocking log writes are flushed.
///
/// # Panics
/// * If the log file or rolling appender cannot be created
/// * If a global subscriber is already installed
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(build_writer(&config.logging));

    let to_console = config.logging.file.as_ref().is_none_or(|f| f.is_empty());
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(EnvFilter::new(config.logging.level.clone()))
        .with_level(true)
        .with_ansi(to_console);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}

/// Pick the log destination: stdout, a plain file, or daily-rotated files
/// with a bounded backlog.
fn build_writer(logging: &LoggingConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let log_file = match logging.file.as_deref() {
        Some(path) if !path.is_empty() => std::path::Path::new(path),
        _ => return Box::new(std::io::stdout()),
    };

    if logging.enable_rotation {
        let dir = log_file.parent().unwrap_or(std::path::Path::new("."));
        let stem = log_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("bankmetrics");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(stem)
            .filename_suffix("log")
            .max_log_files(logging.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    }
}
