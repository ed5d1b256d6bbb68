//! `seasonswap decide` – evaluate the interception decision for a URL.

use anyhow::{Context, Result};
use url::Url;

use seasonswap_core::catalog::SeasonCatalog;
use seasonswap_core::expiry;
use seasonswap_core::intercept::{decide_request, Decision};
use seasonswap_core::store::{JsonFileStore, OverrideStore};

pub fn run_decide(store: &JsonFileStore, url: &str) -> Result<()> {
    // Decision functions require a parsed URL; reject junk here.
    let url = Url::parse(url).with_context(|| format!("invalid request URL: {url}"))?;
    let state = store.state()?;
    let catalog = SeasonCatalog::builtin();

    match decide_request(&url, &state, &catalog, expiry::now_ms()) {
        Decision::Pass => println!("pass: not a watched request"),
        Decision::Cancel => println!("cancel: watched, but no rewrite applies"),
        Decision::Redirect { target } => println!("redirect -> {target}"),
    }
    Ok(())
}
