// Rust guideline compliant 2026-10-17

//! Error types for the Replykit core library.

use thiserror::Error;

/// Result type alias for Replykit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Replykit operations.
///
/// Building an envelope never fails; these cover the serialization and
/// catalog helpers layered on top.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Status code is not part of the catalog.
    #[error("Unknown status code: {0}")]
    UnknownStatus(u16),
}
