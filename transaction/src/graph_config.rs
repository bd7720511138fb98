//! Graph-wide configuration feeding builder defaults.

use trellis_core::TypeMakerPolicy;

/// Graph-wide settings that seed every new [`TransactionBuilder`].
///
/// These are the per-database knobs; per-transaction overrides happen on the
/// builder itself.
///
/// [`TransactionBuilder`]: crate::TransactionBuilder
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Open every transaction read-only.
    pub read_only: bool,
    /// Assign element identifiers immediately instead of at commit.
    pub flush_ids: bool,
    /// Open every transaction in batch-loading mode.
    pub batch_loading: bool,
    /// Prefetch properties in bulk on first access.
    pub property_prefetching: bool,
    /// Vertex cache bound for each transaction.
    pub tx_cache_size: usize,
    /// Metrics prefix; the system default applies when absent.
    pub metrics_prefix: Option<String>,
    /// Policy for types first referenced without a prior definition.
    pub type_maker: TypeMakerPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            flush_ids: true,
            batch_loading: false,
            property_prefetching: true,
            tx_cache_size: 20_000,
            metrics_prefix: None,
            type_maker: TypeMakerPolicy::DefaultTypes,
        }
    }
}
