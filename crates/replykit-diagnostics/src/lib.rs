// Rust guideline compliant 2026-10-17

//! Diagnostic channel setup for Replykit.
//!
//! `replykit-core` reports unhandled errors through `tracing` and never
//! installs a subscriber itself. This crate loads the logging configuration
//! and installs the subscriber that receives those events.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{DiagnosticsConfig, LogFormat};
pub use error::{DiagnosticsError, Result};
pub use logging::{build_subscriber, init, parse_log_level};
