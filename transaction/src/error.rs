//! Transaction error types.

use thiserror::Error;

/// Transaction configuration errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A cache size below zero was requested.
    #[error("cache size cannot be negative: {0}")]
    NegativeCacheSize(i64),
}

/// Result type for transaction configuration.
pub type TransactionResult<T> = Result<T, TransactionError>;
