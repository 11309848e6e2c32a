use std::io;

use thiserror::Error;

/// Library-wide error type for provision operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No saved order draft in the current directory.
    #[error("No saved order draft found. Run 'provision wizard' first.")]
    DraftNotFound,

    /// Saved draft exists but could not be decoded.
    #[error("Saved draft is not readable: {0}")]
    MalformedDraft(String),

    /// Submission requires a customer name; local derivation does not.
    #[error("Customer name is required before submitting the order")]
    MissingCustomerName,

    /// Record-service credentials are not configured. Fatal for the
    /// submission boundary only.
    #[error("{0}")]
    MissingCredentials(String),

    /// Record-service call failed or was rejected.
    #[error("Record service error: {0}")]
    RecordService(String),

    /// Clipboard is unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An interactive prompt failed.
    #[error("{0}")]
    Prompt(String),
}
