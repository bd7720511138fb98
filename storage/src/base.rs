//! Shared state for backend transactions.

use std::sync::Arc;

use trellis_core::{
    TransactionConfiguration, TxConfig, DEFAULT_METRICS_PREFIX, METRICS_PREFIX, TIMESTAMP_OVERRIDE,
};

use crate::error::StorageResult;

/// Common state and behavior for backend transactions.
///
/// Backends embed one of these and delegate the shared parts of
/// [`StoreTransaction`](crate::StoreTransaction) to it: configuration
/// access, the timestamp slot, metrics-prefix resolution, and the no-op
/// lifecycle calls.
#[derive(Debug)]
pub struct BaseTransaction {
    /// Frozen configuration shared with the graph transaction.
    config: Arc<TxConfig>,
    /// Backend commit timestamp; 0 until assigned.
    timestamp: i64,
}

impl BaseTransaction {
    /// Bind a transaction to its frozen configuration.
    ///
    /// The timestamp slot is seeded from the configuration's commit-time
    /// override when one was stamped, else 0.
    pub fn new(config: Arc<TxConfig>) -> Self {
        let timestamp = config
            .storage_configuration()
            .get(&TIMESTAMP_OVERRIDE)
            .unwrap_or(0);
        tracing::trace!(timestamp, "Opening store transaction");
        Self { config, timestamp }
    }

    /// The frozen configuration this transaction was opened with.
    pub fn configuration(&self) -> &TxConfig {
        &self.config
    }

    /// Backend commit timestamp; 0 when unassigned.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Record the backend commit timestamp.
    pub fn set_timestamp(&mut self, ts: i64) {
        self.timestamp = ts;
    }

    /// Metrics prefix from the storage configuration, falling back to the
    /// system default for configurations that never had one stamped.
    pub fn metrics_prefix(&self) -> &str {
        self.config
            .storage_configuration()
            .get_str(&METRICS_PREFIX)
            .unwrap_or(DEFAULT_METRICS_PREFIX)
    }

    /// Accepts and does nothing; backends with pending state implement the
    /// trait method themselves instead of delegating.
    pub fn commit(&mut self) -> StorageResult<()> {
        Ok(())
    }

    /// Accepts and does nothing.
    pub fn rollback(&mut self) -> StorageResult<()> {
        Ok(())
    }

    /// Accepts and does nothing.
    pub fn flush(&mut self) -> StorageResult<()> {
        Ok(())
    }
}
