// Rust guideline compliant 2026-10-17

//! Error handling for diagnostics setup.

use thiserror::Error;

/// Result type alias for diagnostics operations.
pub type Result<T> = std::result::Result<T, DiagnosticsError>;

/// Errors raised while loading configuration or installing logging.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// IO error while reading config or opening the log file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected schema.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// A config value or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
