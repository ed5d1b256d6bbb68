//! Background-image redirect decision.

use crate::catalog::SeasonCatalog;
use crate::expiry;
use crate::store::OverrideState;

use super::{Decision, PLATFORM_BASE};

/// Decide what to do with a request for a season background image.
///
/// Redirection is only justified when the browser would otherwise display a
/// genuinely ended season's art: the requested path must resolve to a catalog
/// season whose end date is strictly past. Requests for unrelated or
/// already-correct images are left untouched, so behaviour outside the
/// narrow override window stays normal.
pub fn decide_image_request(
    requested_path: &str,
    state: &OverrideState,
    catalog: &SeasonCatalog,
    now_ms: i64,
) -> Decision {
    if expiry::is_stale(state.last_changed_ms, now_ms) {
        return Decision::Cancel;
    }

    let override_season = match state.season_override.and_then(|h| catalog.find_by_hash(h)) {
        Some(season) => season,
        None => {
            tracing::debug!(
                override_hash = ?state.season_override,
                "no catalog season for the override"
            );
            return Decision::Cancel;
        }
    };

    // Browser is already asking for the desired image.
    if override_season.image_path == requested_path {
        return Decision::Cancel;
    }

    match catalog.find_by_image_path(requested_path) {
        Some(requested) if requested.end_ms < now_ms => {
            let target = format!("{PLATFORM_BASE}{}", override_season.image_path);
            tracing::debug!(%requested_path, %target, "redirecting ended season image");
            Decision::Redirect { target }
        }
        _ => Decision::Cancel,
    }
}
