//! Fluent construction of transaction configurations.

use trellis_config::ConfigMap;
use trellis_core::{
    approx_ns_since_epoch, TransactionConfiguration, TxConfig, TxConfigError, TxConfigResult,
    TypeMakerPolicy, DEFAULT_METRICS_PREFIX, METRICS_PREFIX, TIMESTAMP_OVERRIDE,
};

use crate::error::{TransactionError, TransactionResult};
use crate::graph_config::GraphConfig;

/// Graph-layer entry point for freshly frozen configurations.
///
/// Implementors decide what a started transaction handle is and how the
/// snapshot is shared with a storage backend, typically by wrapping it in an
/// `Arc` and opening a backend transaction against it.
pub trait TransactionFactory {
    /// Graph transaction handle produced by a successful start.
    type Handle;
    /// Failure reported when the transaction cannot be opened.
    type Error;

    /// Open a new graph transaction over the frozen configuration.
    fn new_transaction(&self, config: TxConfig) -> Result<Self::Handle, Self::Error>;
}

/// Fluent builder for a transaction's configuration.
///
/// A builder starts from the graph-wide defaults of a [`GraphConfig`],
/// absorbs per-transaction overrides through consuming setters, and is spent
/// by [`start`](TransactionBuilder::start), which freezes the settings into
/// a [`TxConfig`] and hands it to the graph's [`TransactionFactory`].
///
/// The builder is also a live [`TransactionConfiguration`]: reads are
/// answered from the current settings and may change with further setter
/// calls, unlike reads on the frozen snapshot.
#[derive(Debug)]
pub struct TransactionBuilder {
    read_only: bool,
    assign_ids_immediately: bool,
    verify_external_vertex_existence: bool,
    verify_internal_vertex_existence: bool,
    verify_uniqueness: bool,
    acquire_locks: bool,
    property_prefetching: bool,
    single_threaded: bool,
    thread_bound: bool,
    vertex_cache_size: i64,
    index_cache_weight: i64,
    timestamp: Option<i64>,
    metrics_prefix: Option<String>,
    type_maker: TypeMakerPolicy,
    storage: ConfigMap,
}

impl TransactionBuilder {
    /// Create a builder seeded from the graph-wide configuration.
    pub fn new(graph_config: &GraphConfig) -> Self {
        let mut builder = Self {
            read_only: false,
            assign_ids_immediately: graph_config.flush_ids,
            verify_external_vertex_existence: true,
            verify_internal_vertex_existence: false,
            verify_uniqueness: true,
            acquire_locks: true,
            property_prefetching: graph_config.property_prefetching,
            single_threaded: false,
            thread_bound: false,
            vertex_cache_size: 0,
            index_cache_weight: 0,
            timestamp: None,
            metrics_prefix: graph_config.metrics_prefix.clone(),
            type_maker: graph_config.type_maker,
            storage: ConfigMap::new(),
        };
        if graph_config.read_only {
            builder = builder.read_only();
        }
        builder = builder.apply_cache_size(graph_config.tx_cache_size as i64);
        if graph_config.batch_loading {
            builder = builder.enable_batch_loading();
        }
        builder
    }

    /// Bind the transaction to the thread that opens it.
    ///
    /// A thread-bound transaction is also single-threaded.
    pub fn thread_bound(mut self) -> Self {
        self.thread_bound = true;
        self.single_threaded = true;
        self
    }

    /// Refuse mutations in this transaction.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Trade verification for bulk-load throughput.
    ///
    /// Clears uniqueness verification, external vertex existence checks and
    /// lock acquisition together. Other settings are untouched.
    pub fn enable_batch_loading(mut self) -> Self {
        self.verify_uniqueness = false;
        self.verify_external_vertex_existence = false;
        self.acquire_locks = false;
        self
    }

    /// Bound both caches for this transaction.
    ///
    /// Sets the vertex cache to `size` and the index cache weight to
    /// `size / 2` as one operation; the two cannot be set independently.
    /// A negative size is refused immediately.
    pub fn set_cache_size(self, size: i64) -> TransactionResult<Self> {
        if size < 0 {
            return Err(TransactionError::NegativeCacheSize(size));
        }
        Ok(self.apply_cache_size(size))
    }

    /// Re-check internally created vertices for existence.
    pub fn check_internal_vertex_existence(mut self) -> Self {
        self.verify_internal_vertex_existence = true;
        self
    }

    /// Fix the commit timestamp, in nanoseconds since the Unix epoch.
    pub fn set_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Report backend metrics for this transaction under the given prefix.
    pub fn set_metrics_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.metrics_prefix = Some(prefix.into());
        self
    }

    /// Freeze the settings and open the transaction through the factory.
    ///
    /// Stamps the backend-facing map first: the commit-time override (the
    /// explicit timestamp, else the current approximate time) and the
    /// resolved metrics prefix (the configured prefix, else the system
    /// default). No further validation happens here; setters have already
    /// refused invalid values.
    pub fn start<F: TransactionFactory>(mut self, graph: &F) -> Result<F::Handle, F::Error> {
        let override_ns = self.timestamp.unwrap_or_else(approx_ns_since_epoch);
        self.storage.set(&TIMESTAMP_OVERRIDE, override_ns);

        let resolved_prefix = self
            .metrics_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_METRICS_PREFIX.to_string());
        self.storage.set(&METRICS_PREFIX, resolved_prefix);

        tracing::debug!(
            read_only = self.read_only,
            thread_bound = self.thread_bound,
            vertex_cache_size = self.vertex_cache_size,
            timestamp_override = override_ns,
            "Starting transaction"
        );

        let config = TxConfig::new(
            self.read_only,
            self.assign_ids_immediately,
            self.verify_external_vertex_existence,
            self.verify_internal_vertex_existence,
            self.acquire_locks,
            self.verify_uniqueness,
            self.property_prefetching,
            self.single_threaded,
            self.thread_bound,
            self.timestamp,
            self.vertex_cache_size,
            self.metrics_prefix,
            self.type_maker,
            self.storage,
        );
        graph.new_transaction(config)
    }

    /// The one place both cache bounds change.
    fn apply_cache_size(mut self, size: i64) -> Self {
        self.vertex_cache_size = size;
        self.index_cache_weight = size / 2;
        self
    }
}

impl TransactionConfiguration for TransactionBuilder {
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn has_assign_ids_immediately(&self) -> bool {
        self.assign_ids_immediately
    }

    fn has_verify_external_vertex_existence(&self) -> bool {
        self.verify_external_vertex_existence
    }

    fn has_verify_internal_vertex_existence(&self) -> bool {
        self.verify_internal_vertex_existence
    }

    fn has_acquire_locks(&self) -> bool {
        self.acquire_locks
    }

    fn has_verify_uniqueness(&self) -> bool {
        self.verify_uniqueness
    }

    fn has_property_prefetching(&self) -> bool {
        self.property_prefetching
    }

    fn is_single_threaded(&self) -> bool {
        self.single_threaded
    }

    fn is_thread_bound(&self) -> bool {
        self.thread_bound
    }

    fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }

    fn timestamp(&self) -> TxConfigResult<i64> {
        self.timestamp.ok_or(TxConfigError::TimestampNotSet)
    }

    fn vertex_cache_size(&self) -> i64 {
        self.vertex_cache_size
    }

    fn index_cache_weight(&self) -> i64 {
        self.index_cache_weight
    }

    fn metrics_prefix(&self) -> Option<&str> {
        self.metrics_prefix.as_deref()
    }

    fn default_type_maker(&self) -> TypeMakerPolicy {
        self.type_maker
    }

    fn storage_configuration(&self) -> &ConfigMap {
        &self.storage
    }
}
