//! Error types for slot parsing.

use thiserror::Error;

/// Errors produced when a free-text slot description fails to parse.
///
/// These are ordinary failure values for the caller to re-prompt on -- nothing
/// in this crate panics on bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text matched none of the recognized slot grammars.
    #[error("unrecognized slot text: {0:?}")]
    Unrecognized(String),

    /// A clock token had an hour outside 0-23 or a minute outside 0-59.
    #[error("time of day out of range: {0:?}")]
    TimeOutOfRange(String),

    /// A range was zero-length or inverted (`end <= start`).
    #[error("empty or inverted range: {0:?}")]
    EmptyRange(String),
}

/// Convenience alias used throughout slot-core.
pub type Result<T> = std::result::Result<T, ParseError>;
