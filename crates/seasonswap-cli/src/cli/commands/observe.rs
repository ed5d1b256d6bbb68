//! `seasonswap observe` – feed an outbound request through the credential
//! capture filter and persist anything it harvests.

use anyhow::{bail, Context, Result};
use serde_json::json;
use url::Url;

use seasonswap_core::capture::{capture_api_key, Header};
use seasonswap_core::expiry;
use seasonswap_core::intercept::is_platform_request;
use seasonswap_core::reconcile::reconcile;
use seasonswap_core::store::{ChangeSet, JsonFileStore, OverrideStore, KEY_API_KEY};

pub fn run_observe(store: &mut JsonFileStore, url: &str, headers: &[String]) -> Result<()> {
    let url = Url::parse(url).with_context(|| format!("invalid request URL: {url}"))?;
    let headers = parse_headers(headers)?;

    // The capture listener is only registered for platform API traffic.
    if !is_platform_request(&url) {
        println!("not a platform API request; nothing captured");
        return Ok(());
    }

    match capture_api_key(&url, &headers) {
        Some(key) => {
            let now = expiry::now_ms();
            let current = store.state()?;
            let changes = ChangeSet::new().with(KEY_API_KEY, json!(key));
            let out = reconcile(&changes.new_values(), &current, now);
            store.set(&out.writes)?;
            println!("captured API key from {}", url.path());
        }
        None => println!("no API key on this request"),
    }
    Ok(())
}

fn parse_headers(raw: &[String]) -> Result<Vec<Header>> {
    raw.iter()
        .map(|h| match h.split_once('=') {
            Some((name, value)) => Ok(Header::new(name.trim(), value)),
            None => bail!("header must be NAME=VALUE, got: {h}"),
        })
        .collect()
}
