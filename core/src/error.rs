//! Common error types for transaction configuration.

use thiserror::Error;

/// Errors raised by configuration accessors.
#[derive(Debug, Error)]
pub enum TxConfigError {
    /// No commit timestamp has been configured.
    #[error("a timestamp has not been configured")]
    TimestampNotSet,
}

/// Result type for configuration accessors.
pub type TxConfigResult<T> = Result<T, TxConfigError>;
