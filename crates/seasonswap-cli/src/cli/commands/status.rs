//! `seasonswap status` – show the stored override state.

use anyhow::Result;
use seasonswap_core::catalog::SeasonCatalog;
use seasonswap_core::expiry;
use seasonswap_core::store::{JsonFileStore, OverrideStore};

pub fn run_status(store: &JsonFileStore) -> Result<()> {
    let state = store.state()?;
    let now = expiry::now_ms();

    match state.season_override {
        Some(hash) => {
            let catalog = SeasonCatalog::builtin();
            match catalog.find_by_hash(hash) {
                Some(season) => println!("override: {hash} (image {})", season.image_path),
                None => println!("override: {hash} (not in catalog; interception inert)"),
            }
        }
        None => println!("override: none"),
    }

    match state.last_changed_ms {
        Some(changed) => {
            let verdict = if expiry::is_stale(state.last_changed_ms, now) {
                "stale"
            } else {
                "fresh"
            };
            println!("last changed: {changed} ({verdict})");
        }
        None => println!("last changed: never"),
    }

    if state.has_api_key() {
        println!("api key: captured");
    } else {
        println!("api key: not yet captured");
    }
    println!("store file: {}", store.path().display());
    Ok(())
}
