//! Override staleness: a soft logical timeout on the selection's validity.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// How long a season override stays valid after its last change.
pub const STALE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Whether a stored change timestamp is too old to honour.
///
/// An absent timestamp means the state is fresh (nothing to expire).
/// Otherwise the override is stale once more than [`STALE_INTERVAL`] has
/// passed since `last_changed_ms`. Total over all inputs, including clocks
/// that moved backwards.
pub fn is_stale(last_changed_ms: Option<i64>, now_ms: i64) -> bool {
    match last_changed_ms {
        None => false,
        Some(changed) => now_ms.saturating_sub(changed) > STALE_INTERVAL.as_millis() as i64,
    }
}

/// Current wall-clock time as epoch milliseconds, the unit the store uses.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
