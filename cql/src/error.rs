//! CQL error types.

use thiserror::Error;

/// Errors reported by the CQL backend layer.
#[derive(Debug, Error)]
pub enum CqlError {
    /// A consistency level string matched no known level.
    #[error("unknown consistency level: {0}")]
    UnknownConsistencyLevel(String),

    /// A transaction handle of some other backend was passed in.
    #[error("unexpected transaction type")]
    UnexpectedTransactionType,
}

/// Result type for CQL backend operations.
pub type CqlResult<T> = Result<T, CqlError>;
