//! Settings-endpoint redirect decision.

use url::Url;

use crate::expiry;
use crate::store::OverrideState;

use super::{has_self_marker, Decision, SEASON_SERVICE_URL};

/// Decide what to do with a request for the platform settings endpoint.
///
/// Simpler than the image decision: no catalog lookup, because the season
/// service builds its own season-specific response. The sentinel check comes
/// first so our own follow-up call is never intercepted again.
pub fn decide_settings_request(url: &Url, state: &OverrideState, now_ms: i64) -> Decision {
    if has_self_marker(url) {
        return Decision::Cancel;
    }
    if expiry::is_stale(state.last_changed_ms, now_ms) {
        return Decision::Cancel;
    }
    match state.season_override {
        Some(hash) if hash > 0 => Decision::Redirect {
            target: format!("{SEASON_SERVICE_URL}?season={hash}"),
        },
        _ => Decision::Cancel,
    }
}
