//! Trellis Storage
//!
//! The backend seam of the transaction layer:
//! - The `StoreTransaction` contract every backend handle implements
//! - The `StoreManager` factory contract for opening handles
//! - `BaseTransaction`, the embeddable state backends delegate to
//! - A no-op backend for storage-less graphs and tests
//! - Storage error types

mod base;
mod error;
mod noop;
mod transaction;

pub use base::*;
pub use error::*;
pub use noop::*;
pub use transaction::*;
