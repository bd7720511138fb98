//! Wall-clock sampling for timestamp defaults.

use std::time::{SystemTime, UNIX_EPOCH};

/// Approximate current time in nanoseconds since the Unix epoch.
///
/// Best effort: resolution is platform-dependent and callers must not rely
/// on uniqueness or monotonicity. A clock set before the epoch reads as 0.
pub fn approx_ns_since_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
