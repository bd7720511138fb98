//! Graph-level configuration keys.
//!
//! These keys are stamped into the backend-facing map when a transaction
//! starts, so a backend can read them without depending on the graph layer.

use trellis_config::ConfigKey;

/// Metrics prefix applied when no explicit prefix is configured anywhere.
pub const DEFAULT_METRICS_PREFIX: &str = "trellis";

/// Commit-time override in nanoseconds since the Unix epoch.
///
/// No declared default: absence means the backend chooses its own commit
/// time.
pub const TIMESTAMP_OVERRIDE: ConfigKey<i64> = ConfigKey::new("tx.timestamp-override");

/// Prefix under which backend metrics for this transaction are reported.
pub const METRICS_PREFIX: ConfigKey<String> =
    ConfigKey::with_default("metrics.prefix", || DEFAULT_METRICS_PREFIX.to_string());
