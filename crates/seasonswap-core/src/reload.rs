//! Reload trigger policy.
//!
//! After a storage change the shell may reload the tabs that render season
//! content. Rapid successive change events must not cause a reload storm, so
//! firing is debounced. The timestamp of the last reload is the only mutable
//! state crossing event boundaries; it lives in an explicit [`ReloadGate`]
//! owned by the caller, never in a module global.

use std::time::Duration;

/// Minimum spacing between two tab reloads.
pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Pure reload decision.
///
/// Fires only when a credential is on hand, the new override is set and
/// positive, it actually changed, and the debounce window has passed.
pub fn should_reload(
    previous_override: Option<u32>,
    new_override: Option<u32>,
    has_api_key: bool,
    now_ms: i64,
    last_reload_ms: i64,
) -> bool {
    if !has_api_key {
        return false;
    }
    let new = match new_override {
        Some(n) if n > 0 => n,
        _ => return false,
    };
    if previous_override == Some(new) {
        return false;
    }
    now_ms.saturating_sub(last_reload_ms) >= RELOAD_DEBOUNCE.as_millis() as i64
}

/// Caller-owned debounce state for the reload policy.
#[derive(Debug, Clone, Default)]
pub struct ReloadGate {
    last_reload_ms: i64,
}

impl ReloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply [`should_reload`]; on a firing decision the gate records `now_ms`
    /// as the last reload time before the caller issues the reloads.
    pub fn observe(
        &mut self,
        previous_override: Option<u32>,
        new_override: Option<u32>,
        has_api_key: bool,
        now_ms: i64,
    ) -> bool {
        let fire = should_reload(
            previous_override,
            new_override,
            has_api_key,
            now_ms,
            self.last_reload_ms,
        );
        if fire {
            self.last_reload_ms = now_ms;
        } else {
            tracing::debug!(
                ?previous_override,
                ?new_override,
                has_api_key,
                "reload suppressed"
            );
        }
        fire
    }

    pub fn last_reload_ms(&self) -> i64 {
        self.last_reload_ms
    }
}
