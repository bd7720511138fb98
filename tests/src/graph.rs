//! A minimal graph-side factory over a store manager.

use std::sync::Arc;

use trellis_core::TxConfig;
use trellis_storage::{StorageError, StorageResult, StoreManager, StoreTransaction};
use trellis_transaction::TransactionFactory;

/// Graph transaction handle pairing the frozen snapshot with its backend
/// transaction.
#[derive(Debug)]
pub struct GraphTransaction<T: StoreTransaction> {
    config: Arc<TxConfig>,
    store: T,
}

impl<T: StoreTransaction> GraphTransaction<T> {
    /// The frozen configuration this transaction runs under.
    pub fn configuration(&self) -> &TxConfig {
        &self.config
    }

    /// The backend transaction, for inspection.
    pub fn store(&self) -> &T {
        &self.store
    }

    /// The backend transaction, for lifecycle calls.
    pub fn store_mut(&mut self) -> &mut T {
        &mut self.store
    }

    /// Commit through to the backend.
    pub fn commit(&mut self) -> StorageResult<()> {
        self.store.commit()
    }

    /// Roll back through to the backend.
    pub fn rollback(&mut self) -> StorageResult<()> {
        self.store.rollback()
    }
}

/// The embedding graph reduced to its factory role: freeze, share, open.
#[derive(Debug, Default)]
pub struct TestGraph<M: StoreManager> {
    manager: M,
}

impl<M: StoreManager> TestGraph<M> {
    pub fn new(manager: M) -> Self {
        Self { manager }
    }
}

impl<M: StoreManager> TransactionFactory for TestGraph<M> {
    type Handle = GraphTransaction<M::Transaction>;
    type Error = StorageError;

    fn new_transaction(&self, config: TxConfig) -> Result<Self::Handle, Self::Error> {
        let config = Arc::new(config);
        let store = self.manager.begin_transaction(Arc::clone(&config))?;
        Ok(GraphTransaction { config, store })
    }
}
