//! The transaction-configuration read contract and its frozen snapshot.

use trellis_config::ConfigMap;

use crate::error::{TxConfigError, TxConfigResult};
use crate::typemaker::TypeMakerPolicy;

/// Read access to a transaction's configuration.
///
/// Implemented by the live builder (answers may still change between calls)
/// and by the frozen [`TxConfig`] snapshot (answers never change). Code that
/// only reads configuration is written against this trait so it works with
/// either.
pub trait TransactionConfiguration {
    /// Whether the transaction refuses mutations.
    fn is_read_only(&self) -> bool;

    /// Whether identifiers are assigned immediately on element creation
    /// rather than deferred to commit.
    fn has_assign_ids_immediately(&self) -> bool;

    /// Whether externally referenced vertices are checked for existence.
    fn has_verify_external_vertex_existence(&self) -> bool;

    /// Whether internally created vertices are re-checked for existence.
    fn has_verify_internal_vertex_existence(&self) -> bool;

    /// Whether locks are acquired for consistency-critical updates.
    fn has_acquire_locks(&self) -> bool;

    /// Whether uniqueness constraints are verified.
    fn has_verify_uniqueness(&self) -> bool;

    /// Whether properties are prefetched in bulk on first access.
    fn has_property_prefetching(&self) -> bool;

    /// Whether the transaction assumes a single thread of execution.
    fn is_single_threaded(&self) -> bool;

    /// Whether the transaction is bound to the thread that opened it.
    fn is_thread_bound(&self) -> bool;

    /// Whether a commit timestamp has been configured.
    fn has_timestamp(&self) -> bool;

    /// The configured commit timestamp in nanoseconds since the Unix epoch.
    ///
    /// Absence is reported as [`TxConfigError::TimestampNotSet`], never as a
    /// sentinel value.
    fn timestamp(&self) -> TxConfigResult<i64>;

    /// Upper bound on the vertex cache for this transaction.
    fn vertex_cache_size(&self) -> i64;

    /// Upper bound on the index cache, always half the vertex cache size.
    fn index_cache_weight(&self) -> i64;

    /// The configured metrics prefix, if any.
    ///
    /// The resolved prefix (configured or system default) is stamped into
    /// the storage configuration when the transaction starts.
    fn metrics_prefix(&self) -> Option<&str>;

    /// Policy for types first referenced without a prior definition.
    fn default_type_maker(&self) -> TypeMakerPolicy;

    /// Backend-facing configuration entries.
    fn storage_configuration(&self) -> &ConfigMap;
}

/// Frozen transaction configuration.
///
/// Built in one shot when a builder starts a transaction and never mutated
/// afterwards: there are no setters, and the embedded [`ConfigMap`] is only
/// handed out by shared reference. Typically shared between the graph
/// transaction and its backend transaction as `Arc<TxConfig>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TxConfig {
    /// Mutations are refused.
    read_only: bool,
    /// Identifiers are assigned on creation, not at commit.
    assign_ids_immediately: bool,
    /// Externally referenced vertices are checked for existence.
    verify_external_vertex_existence: bool,
    /// Internally created vertices are re-checked for existence.
    verify_internal_vertex_existence: bool,
    /// Locks are acquired for consistency-critical updates.
    acquire_locks: bool,
    /// Uniqueness constraints are verified.
    verify_uniqueness: bool,
    /// Properties are prefetched in bulk.
    property_prefetching: bool,
    /// Single thread of execution is assumed.
    single_threaded: bool,
    /// Bound to the opening thread.
    thread_bound: bool,
    /// Commit timestamp in nanoseconds since the Unix epoch, if configured.
    timestamp: Option<i64>,
    /// Vertex cache bound.
    vertex_cache_size: i64,
    /// Index cache bound, derived from the vertex cache bound.
    index_cache_weight: i64,
    /// Configured metrics prefix, if any.
    metrics_prefix: Option<String>,
    /// Implicit-schema policy.
    type_maker: TypeMakerPolicy,
    /// Backend-facing configuration entries.
    storage: ConfigMap,
}

impl TxConfig {
    /// Assemble a snapshot from fully resolved settings.
    ///
    /// The index cache weight is derived here as half the vertex cache size;
    /// it cannot be supplied independently.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        read_only: bool,
        assign_ids_immediately: bool,
        verify_external_vertex_existence: bool,
        verify_internal_vertex_existence: bool,
        acquire_locks: bool,
        verify_uniqueness: bool,
        property_prefetching: bool,
        single_threaded: bool,
        thread_bound: bool,
        timestamp: Option<i64>,
        vertex_cache_size: i64,
        metrics_prefix: Option<String>,
        type_maker: TypeMakerPolicy,
        storage: ConfigMap,
    ) -> Self {
        Self {
            read_only,
            assign_ids_immediately,
            verify_external_vertex_existence,
            verify_internal_vertex_existence,
            acquire_locks,
            verify_uniqueness,
            property_prefetching,
            single_threaded,
            thread_bound,
            timestamp,
            vertex_cache_size,
            index_cache_weight: vertex_cache_size / 2,
            metrics_prefix,
            type_maker,
            storage,
        }
    }
}

impl TransactionConfiguration for TxConfig {
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
