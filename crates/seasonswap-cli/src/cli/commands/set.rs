//! `seasonswap set` – select a season override, as the settings UI would.

use anyhow::Result;
use serde_json::json;
use seasonswap_core::catalog::SeasonCatalog;
use seasonswap_core::config::SwapConfig;
use seasonswap_core::expiry;
use seasonswap_core::reconcile::reconcile;
use seasonswap_core::reload::ReloadGate;
use seasonswap_core::store::{
    ChangeSet, JsonFileStore, OverrideStore, KEY_LAST_CHANGED, KEY_SEASON_HASH,
};

pub fn run_set(store: &mut JsonFileStore, cfg: &SwapConfig, season_hash: u32) -> Result<()> {
    let catalog = SeasonCatalog::builtin();
    if catalog.find_by_hash(season_hash).is_none() {
        println!("warning: {season_hash} is not in the catalog; image interception will be inert");
    }

    let now = expiry::now_ms();
    let current = store.state()?;
    let previous = current.season_override;

    let changes = ChangeSet::new()
        .with(KEY_SEASON_HASH, json!(season_hash))
        .with(KEY_LAST_CHANGED, json!(now));
    let out = reconcile(&changes.new_values(), &current, now);
    store.set(&out.writes)?;
    store.remove(&out.removals)?;

    println!("override set to {season_hash}");

    // One gate per event delivery; a long-lived shell would keep it across
    // events to debounce bursts.
    let mut gate = ReloadGate::new();
    if gate.observe(previous, out.state.season_override, out.state.has_api_key(), now) {
        println!("would reload tabs at {}", cfg.reload_tab_url);
    } else if !out.state.has_api_key() {
        println!("no API key captured yet; tabs left alone");
    }
    Ok(())
}
