//! CQL transaction handle and factory.

use std::any::Any;
use std::sync::Arc;

use trellis_config::ConfigKey;
use trellis_core::{TransactionConfiguration, TxConfig};
use trellis_storage::{BaseTransaction, StorageResult, StoreManager, StoreTransaction};

use crate::consistency::ConsistencyLevel;
use crate::error::{CqlError, CqlResult};

/// Consistency applied when a level key is absent from the configuration.
pub const DEFAULT_CONSISTENCY: ConsistencyLevel = ConsistencyLevel::Quorum;

/// Consistency level for reads issued in a transaction.
pub const READ_CONSISTENCY: ConfigKey<String> =
    ConfigKey::with_default("cql.read-consistency", || {
        DEFAULT_CONSISTENCY.as_str().to_string()
    });

/// Consistency level for writes issued in a transaction.
pub const WRITE_CONSISTENCY: ConfigKey<String> =
    ConfigKey::with_default("cql.write-consistency", || {
        DEFAULT_CONSISTENCY.as_str().to_string()
    });

/// Transaction handle for a CQL-speaking column store.
///
/// Adds per-transaction read and write consistency on top of the shared
/// [`BaseTransaction`] state. Levels are resolved from the storage
/// configuration on each call, so a malformed entry surfaces as a parse
/// error at the accessor, not at open.
#[derive(Debug)]
pub struct CqlTransaction {
    base: BaseTransaction,
}

impl CqlTransaction {
    /// Open a CQL transaction bound to the given configuration.
    pub fn new(config: Arc<TxConfig>) -> Self {
        Self {
            base: BaseTransaction::new(config),
        }
    }

    /// Consistency for reads, from `cql.read-consistency`.
    pub fn read_consistency_level(&self) -> CqlResult<ConsistencyLevel> {
        self.consistency(&READ_CONSISTENCY)
    }

    /// Consistency for writes, from `cql.write-consistency`.
    pub fn write_consistency_level(&self) -> CqlResult<ConsistencyLevel> {
        self.consistency(&WRITE_CONSISTENCY)
    }

    /// Recover the concrete CQL transaction from a backend-generic handle.
    ///
    /// Fails with [`CqlError::UnexpectedTransactionType`] when the handle
    /// belongs to some other backend; the handle is never reinterpreted.
    pub fn get_tx(txh: &dyn StoreTransaction) -> CqlResult<&CqlTransaction> {
        txh.as_any()
            .downcast_ref::<CqlTransaction>()
            .ok_or(CqlError::UnexpectedTransactionType)
    }

    fn consistency(&self, key: &ConfigKey<String>) -> CqlResult<ConsistencyLevel> {
        match self.base.configuration().storage_configuration().get(key) {
            Some(raw) => ConsistencyLevel::parse(&raw),
            None => Ok(DEFAULT_CONSISTENCY),
        }
    }
}

impl StoreTransaction for CqlTransaction {
    fn configuration(&self) -> &TxConfig {
        self.base.configuration()
    }

    fn timestamp(&self) -> i64 {
        self.base.timestamp()
    }

    fn set_timestamp(&mut self, ts: i64) {
        self.base.set_timestamp(ts);
    }

    fn metrics_prefix(&self) -> &str {
        self.base.metrics_prefix()
    }

    fn commit(&mut self) -> StorageResult<()> {
        self.base.commit()
    }

    fn rollback(&mut self) -> StorageResult<()> {
        self.base.rollback()
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.base.flush()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory for CQL transactions.
#[derive(Debug, Default)]
pub struct CqlStoreManager;

impl StoreManager for CqlStoreManager {
    type Transaction = CqlTransaction;

    fn begin_transaction(&self, config: Arc<TxConfig>) -> StorageResult<Self::Transaction> {
        Ok(CqlTransaction::new(config))
    }
}
