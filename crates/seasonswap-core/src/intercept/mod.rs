//! Request interception decisions.
//!
//! Each intercepted request is judged by a pure function of an explicit
//! [`OverrideState`] snapshot, the static catalog, and the current time.
//! The shell fetches the snapshot fresh per event and maps the returned
//! [`Decision`] onto the network layer's primitives.

mod image;
mod settings;

pub use image::decide_image_request;
pub use settings::decide_settings_request;

use url::Url;

use crate::catalog::SeasonCatalog;
use crate::store::OverrideState;

/// Origin all intercepted traffic belongs to.
pub const PLATFORM_BASE: &str = "https://www.bungie.net";
/// Host component of [`PLATFORM_BASE`].
pub const PLATFORM_HOST: &str = "www.bungie.net";
/// Path prefix of the platform API.
pub const PLATFORM_API_PREFIX: &str = "/Platform/";
/// Path prefix of the settings endpoint within the platform API.
pub const SETTINGS_PATH_PREFIX: &str = "/Platform/Settings";
/// External season service the settings endpoint is redirected to.
pub const SEASON_SERVICE_URL: &str =
    "https://destiny-activities.destinyreport.workers.dev/seasonPassPass";
/// Query parameter marking a request as one of our own synthesized
/// follow-ups. Requests carrying it are never intercepted again.
pub const SELF_REQUEST_PARAM: &str = "seasonPassPass";

/// What to do with one intercepted request.
///
/// For the handlers in this module `Cancel` means "decline to redirect": the
/// shell must let the request proceed unmodified, never block it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not a request this engine watches; leave it alone.
    Pass,
    /// Watched request, but no rewrite applies.
    Cancel,
    /// Rewrite the request to the given URL.
    Redirect { target: String },
}

/// Whether a URL carries the self-request sentinel.
pub fn has_self_marker(url: &Url) -> bool {
    url.query_pairs().any(|(key, _)| key == SELF_REQUEST_PARAM)
}

/// Whether a URL targets the platform API (the traffic the credential
/// capture filter watches).
pub fn is_platform_request(url: &Url) -> bool {
    url.scheme() == "https"
        && url.host_str() == Some(PLATFORM_HOST)
        && url.path().starts_with(PLATFORM_API_PREFIX)
}

/// Route one request to the matching decision function.
///
/// Mirrors the URL filters the interception listeners register for: the
/// settings endpoint and the catalog's background images. Anything else
/// passes untouched.
pub fn decide_request(
    url: &Url,
    state: &OverrideState,
    catalog: &SeasonCatalog,
    now_ms: i64,
) -> Decision {
    if url.host_str() != Some(PLATFORM_HOST) {
        return Decision::Pass;
    }
    if url.path().starts_with(SETTINGS_PATH_PREFIX) {
        return decide_settings_request(url, state, now_ms);
    }
    if catalog.find_by_image_path(url.path()).is_some() {
        return decide_image_request(url.path(), state, catalog, now_ms);
    }
    Decision::Pass
}
