//! Credential capture filter.
//!
//! The platform requires an API key on every `/Platform/` request; the client
//! already sends one, so we harvest it opportunistically from outbound
//! request headers instead of asking the user for it.

use url::Url;

use crate::intercept::has_self_marker;

/// Header name the platform credential travels under.
const API_KEY_HEADER: &str = "x-api-key";

/// One outbound request header as the interception layer reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Extract the platform API key from an outbound request, if present.
///
/// The header scan is case-insensitive. Requests carrying the self-request
/// sentinel are skipped so our own redirected traffic never feeds back as a
/// credential source. Repeated captures of the same value are harmless; a
/// later genuine request simply overwrites a stale credential.
pub fn capture_api_key(url: &Url, headers: &[Header]) -> Option<String> {
    let header = headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(API_KEY_HEADER))?;
    if header.value.is_empty() {
        return None;
    }
    if has_self_marker(url) {
        return None;
    }
    tracing::debug!(path = url.path(), "captured platform API key");
    Some(header.value.clone())
}
