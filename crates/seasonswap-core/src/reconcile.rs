//! Storage synchronization reducer.
//!
//! Runs on startup and whenever the store reports a change. Reconciles the
//! incoming values against the current snapshot, applying the expiry policy
//! and normalizing the external `seasonHash` alias, and returns the writes
//! and removals the shell should apply. The reducer itself performs no I/O.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::expiry;
use crate::store::{
    self, OverrideState, KEY_API_KEY, KEY_LAST_CHANGED, KEY_SEASON_HASH, KEY_SEASON_OVERRIDE,
};

/// Result of one reducer cycle: the next snapshot plus the store intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciled {
    pub state: OverrideState,
    pub writes: BTreeMap<String, Value>,
    pub removals: Vec<&'static str>,
}

/// Reconcile one incoming change-value map against the current state.
///
/// A stale `lastChangedDate` purges the season selection outright: removals
/// for `seasonOverride` and `lastChangedDate` are emitted and no other field
/// is applied this cycle. The `apiKey` survives expiry. Unrecognized keys and
/// values that do not coerce are ignored.
pub fn reconcile(
    changes: &BTreeMap<String, Value>,
    current: &OverrideState,
    now_ms: i64,
) -> Reconciled {
    let mut next = current.clone();

    if let Some(ts) = changes.get(KEY_LAST_CHANGED).and_then(store::as_epoch_ms) {
        if expiry::is_stale(Some(ts), now_ms) {
            tracing::debug!(last_changed_ms = ts, "override expired, purging selection");
            next.season_override = None;
            next.last_changed_ms = None;
            return Reconciled {
                state: next,
                writes: BTreeMap::new(),
                removals: vec![KEY_SEASON_OVERRIDE, KEY_LAST_CHANGED],
            };
        }
    }

    let mut writes = BTreeMap::new();

    if let Some(hash) = changes.get(KEY_SEASON_HASH).and_then(store::as_season_hash) {
        next.season_override = Some(hash);
        writes.insert(KEY_SEASON_OVERRIDE.to_string(), Value::from(hash));
    }

    // Echo of our own normalized write coming back through the change
    // stream; fold it into the snapshot, nothing new to stage.
    if let Some(hash) = changes
        .get(KEY_SEASON_OVERRIDE)
        .and_then(store::as_season_hash)
    {
        next.season_override = Some(hash);
    }

    if let Some(Value::String(key)) = changes.get(KEY_API_KEY) {
        if !key.is_empty() {
            next.api_key = Some(key.clone());
            writes.insert(KEY_API_KEY.to_string(), Value::from(key.clone()));
        }
    }

    if let Some(ts) = changes.get(KEY_LAST_CHANGED).and_then(store::as_epoch_ms) {
        next.last_changed_ms = Some(ts);
        writes.insert(KEY_LAST_CHANGED.to_string(), Value::from(ts));
    }

    Reconciled {
        state: next,
        writes,
        removals: Vec::new(),
    }
}
