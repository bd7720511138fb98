//! Storage error types.

use thiserror::Error;

/// Errors reported by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Transient backend condition; the operation may succeed if retried.
    #[error("temporary storage failure: {0}")]
    Temporary(String),

    /// Non-recoverable backend failure.
    #[error("permanent storage failure: {0}")]
    Permanent(String),

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn temporary(message: impl Into<String>) -> Self {
        Self::Temporary(message.into())
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self::Permanent(message.into())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
