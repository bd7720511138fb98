//! Trellis CQL
//!
//! Binding of the transaction layer to a CQL-speaking column store:
//! - `ConsistencyLevel`, the CQL consistency tiers with canonical parsing
//! - `CqlTransaction`, a `StoreTransaction` carrying per-transaction read
//!   and write consistency
//! - `CqlStoreManager`, the factory opening CQL transactions
//! - CQL error types

mod consistency;
mod error;
mod transaction;

pub use consistency::*;
pub use error::*;
pub use transaction::*;
