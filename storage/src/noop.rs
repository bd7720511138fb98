//! A storage backend that stores nothing.

use std::any::Any;
use std::sync::Arc;

use trellis_core::TxConfig;

use crate::base::BaseTransaction;
use crate::error::StorageResult;
use crate::transaction::{StoreManager, StoreTransaction};

/// Transaction handle that accepts every call and does nothing.
///
/// Used where a storage-less graph or a test needs a well-formed handle.
/// Repeated terminal calls are accepted and remain no-ops.
#[derive(Debug)]
pub struct NoOpTransaction {
    base: BaseTransaction,
}

impl NoOpTransaction {
    /// Open a no-op transaction bound to the given configuration.
    pub fn new(config: Arc<TxConfig>) -> Self {
        Self {
            base: BaseTransaction::new(config),
        }
    }
}

impl StoreTransaction for NoOpTransaction {
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

/// Factory for no-op transactions.
#[derive(Debug, Default)]
pub struct NoOpStoreManager;

impl StoreManager for NoOpStoreManager {
    type Transaction = NoOpTransaction;

    fn begin_transaction(&self, config: Arc<TxConfig>) -> StorageResult<Self::Transaction> {
        Ok(NoOpTransaction::new(config))
    }
}
