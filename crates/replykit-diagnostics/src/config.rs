// Rust guideline compliant 2026-10-17

//! Configuration for the diagnostic channel.

use crate::error::{DiagnosticsError, Result};
use crate::logging::parse_log_level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up by [`DiagnosticsConfig::load`].
pub const CONFIG_FILE_NAME: &str = "replykit.toml";

/// Line format for emitted log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable text lines.
    Text,
}

/// Configuration for the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Maximum level emitted (error, warn, info, debug, trace).
    #[serde(default = "default_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,

    /// Optional log file; stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Whether events include their module target.
    #[serde(default)]
    pub with_target: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            file: None,
            with_target: false,
        }
    }
}

impl DiagnosticsConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `replykit.toml` inside `dir`
    /// 3. Environment variables with `REPLYKIT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::from_dir(dir)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `replykit.toml` from `dir`, or returns defaults if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Applies overrides resolved through `lookup`.
    ///
    /// Supported variables:
    /// - `REPLYKIT_LOG_LEVEL` - Maximum level
    /// - `REPLYKIT_LOG_FORMAT` - json or text
    /// - `REPLYKIT_LOG_FILE` - Log file path; empty means stderr
    /// - `REPLYKIT_LOG_TARGET` - Include targets (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if an override value is invalid.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("REPLYKIT_LOG_LEVEL") {
            self.level = val;
        }

        if let Some(val) = lookup("REPLYKIT_LOG_FORMAT") {
            self.format = match val.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" => LogFormat::Text,
                _ => {
                    return Err(DiagnosticsError::InvalidConfig(
                        "REPLYKIT_LOG_FORMAT must be json or text".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("REPLYKIT_LOG_FILE") {
            self.file = (!val.is_empty()).then(|| PathBuf::from(val));
        }

        if let Some(val) = lookup("REPLYKIT_LOG_TARGET") {
            self.with_target = val.parse().map_err(|_| {
                DiagnosticsError::InvalidConfig(
                    "REPLYKIT_LOG_TARGET must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the level name is unknown.
    pub fn validate(&self) -> Result<()> {
        parse_log_level(&self.level)?;
        Ok(())
    }

    /// Saves the configuration to `replykit.toml` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}
