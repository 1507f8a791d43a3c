// Rust guideline compliant 2026-10-17

//! Replykit Core Library
//!
//! This crate provides uniform response envelopes for HTTP-style results:
//! - The envelope model (`status`, `message`, `data`, `stack`)
//! - The envelope builder and its truthiness rules
//! - One named helper per supported status code
//! - A static catalog of status codes, reason phrases and categories
//! - Error types and result handling

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod helpers;
pub mod truthy;

pub use catalog::{Category, StatusInfo};
pub use envelope::{build_envelope, ResponseEnvelope};
pub use error::{Error, Result};
pub use helpers::*;
pub use truthy::Truthy;
