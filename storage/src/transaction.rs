//! The backend transaction contract.

use std::any::Any;
use std::sync::Arc;

use trellis_core::TxConfig;

use crate::error::StorageResult;

/// A transaction handle against a storage backend.
///
/// A handle is bound to one frozen [`TxConfig`] for its whole lifetime and
/// ends with exactly one terminal call, `commit` or `rollback`. Terminal
/// calls take `&mut self` rather than `self` so handles stay usable behind
/// `&mut dyn StoreTransaction`; the contract does not police single use, and
/// what a second terminal call does is backend-defined and must be
/// documented by the backend.
///
/// The `Any` supertrait and [`as_any`](StoreTransaction::as_any) exist so
/// backend-specific callers can recover their concrete transaction type with
/// a checked downcast instead of trusting the caller.
pub trait StoreTransaction: Any {
    /// The frozen configuration this transaction was opened with.
    fn configuration(&self) -> &TxConfig;

    /// Backend commit timestamp in nanoseconds since the Unix epoch.
    ///
    /// 0 means no timestamp has been assigned yet.
    fn timestamp(&self) -> i64;

    /// Record the backend commit timestamp.
    fn set_timestamp(&mut self, ts: i64);

    /// Metrics prefix for operations performed in this transaction.
    fn metrics_prefix(&self) -> &str;

    /// Persist the transaction's changes. Terminal.
    fn commit(&mut self) -> StorageResult<()>;

    /// Discard the transaction's changes. Terminal.
    fn rollback(&mut self) -> StorageResult<()>;

    /// Push buffered writes to the backend without ending the transaction.
    fn flush(&mut self) -> StorageResult<()>;

    /// The concrete transaction, for checked downcasts by backend-specific
    /// callers.
    fn as_any(&self) -> &dyn Any;
}

/// Factory for opening backend transactions.
pub trait StoreManager {
    /// The concrete transaction type this backend opens.
    type Transaction: StoreTransaction;

    /// Open a transaction bound to the given configuration.
    fn begin_transaction(&self, config: Arc<TxConfig>) -> StorageResult<Self::Transaction>;
}
