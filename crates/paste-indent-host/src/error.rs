//! Error types of the host layer.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while reading the clipboard.
pub enum ClipboardError {
    #[error("clipboard is not available")]
    /// No clipboard backend is attached.
    NotAvailable,

    #[error("failed to read clipboard: {0}")]
    /// The backend failed to return text.
    ReadFailed(String),
}

#[derive(Debug, Error)]
/// Errors produced by the paste host layer.
pub enum PasteError {
    #[error("tab size must be greater than 0 (got {0})")]
    /// The document's indent options carry an unusable tab size.
    InvalidTabSize(usize),

    #[error("position {line}:{column} is outside the document")]
    /// A selection endpoint does not exist in the document.
    PositionOutOfBounds {
        /// Zero-based line of the offending position.
        line: usize,
        /// Zero-based column of the offending position.
        column: usize,
    },

    #[error("clipboard error: {0}")]
    /// Reading the clipboard failed.
    Clipboard(#[from] ClipboardError),

    #[error("invalid settings: {0}")]
    /// A settings section could not be deserialized.
    Settings(#[from] serde_json::Error),
}
