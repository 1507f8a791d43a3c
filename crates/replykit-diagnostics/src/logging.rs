// Rust guideline compliant 2026-10-17

//! `tracing` subscriber setup.

use crate::config::{DiagnosticsConfig, LogFormat};
use crate::error::{DiagnosticsError, Result};
use std::fs::OpenOptions;
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::MakeWriter;

/// Installs the global subscriber described by `config`.
///
/// Events go to stderr, or to an append-mode file through a non-blocking
/// writer when `config.file` is set. If a global subscriber is already
/// installed the existing one is kept.
///
/// # Returns
///
/// The writer guard for file output. Keep it alive until shutdown so
/// buffered events are flushed.
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init(config: &DiagnosticsConfig) -> Result<Option<WorkerGuard>> {
    if let Some(path) = &config.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = build_subscriber(config, writer)?;
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = build_subscriber(config, std::io::stderr)?;
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Builds a subscriber that writes formatted events to `writer`.
///
/// # Errors
///
/// Returns an error if the configured level is invalid.
pub fn build_subscriber<W>(
    config: &DiagnosticsConfig,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = parse_log_level(&config.level)?;
    let builder = fmt()
        .with_max_level(level)
        .with_target(config.with_target)
        .with_ansi(false)
        .with_writer(writer);

    Ok(match config.format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Text => Box::new(builder.finish()),
    })
}

/// Parses a level name, ignoring case.
///
/// # Errors
///
/// Returns [`DiagnosticsError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(DiagnosticsError::InvalidLogLevel(other.to_string())),
    }
}
