//! Trellis Integration Test Support
//!
//! Test doubles for exercising the full configuration flow: builder →
//! factory → frozen snapshot → backend transaction.
//!
//! # Structure
//!
//! - **backend** - in-memory and failure-injecting store managers that
//!   record the lifecycle calls they receive
//! - **graph** - a minimal `TransactionFactory` wiring a store manager into
//!   the builder seam, the way an embedding graph database would
//!
//! # Example
//!
//! ```ignore
//! use trellis_tests::prelude::*;
//!
//! let graph = TestGraph::new(MemoryStoreManager::default());
//! let tx = TransactionBuilder::new(&GraphConfig::default())
//!     .read_only()
//!     .start(&graph)
//!     .unwrap();
//! assert!(tx.configuration().is_read_only());
//! ```

mod graph;

pub use backend::{
    FailingStoreManager, FailingTransaction, LifecycleCall, MemoryStoreManager, MemoryTransaction,
};
pub use graph::{GraphTransaction, TestGraph};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::{
        FailingStoreManager, FailingTransaction, LifecycleCall, MemoryStoreManager,
        MemoryTransaction,
    };
    pub use crate::graph::{GraphTransaction, TestGraph};
    pub use trellis_config::{ConfigKey, ConfigMap, ConfigValue};
    pub use trellis_core::{
        approx_ns_since_epoch, TransactionConfiguration, TxConfig, TxConfigError, TypeMakerPolicy,
        DEFAULT_METRICS_PREFIX, METRICS_PREFIX, TIMESTAMP_OVERRIDE,
    };
    pub use trellis_cql::{
        ConsistencyLevel, CqlError, CqlStoreManager, CqlTransaction, READ_CONSISTENCY,
        WRITE_CONSISTENCY,
    };
    pub use trellis_storage::{
        NoOpStoreManager, NoOpTransaction, StorageError, StorageResult, StoreManager,
        StoreTransaction,
    };
    pub use trellis_transaction::{
        GraphConfig, TransactionBuilder, TransactionError, TransactionFactory,
    };
}
