//! `seasonswap clear` – drop the override and its change timestamp.

use anyhow::Result;
use seasonswap_core::store::{
    JsonFileStore, OverrideStore, KEY_LAST_CHANGED, KEY_SEASON_OVERRIDE,
};

pub fn run_clear(store: &mut JsonFileStore) -> Result<()> {
    // Same keys expiry purges; the captured API key stays.
    store.remove(&[KEY_SEASON_OVERRIDE, KEY_LAST_CHANGED])?;
    println!("override cleared");
    Ok(())
}
