//! Error types for availability storage.

use thiserror::Error;

/// Errors surfaced by [`SlotStore`](crate::store::SlotStore) write paths.
///
/// Read failures never appear here: a missing or unreadable document is
/// recovered to an empty snapshot inside `load`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The date key was not a real `YYYY-MM-DD` calendar date.
    #[error("invalid calendar date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Writing the availability document to disk failed.
    #[error("failed to write availability document: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the availability document failed.
    #[error("failed to serialize availability document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience alias used throughout overlap-engine.
pub type Result<T> = std::result::Result<T, StoreError>;
