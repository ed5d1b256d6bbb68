//! End-to-end flow over a real JSON-file store: settings UI writes a season
//! hash, the reducer normalizes and persists it, decisions follow the stored
//! snapshot, and expiry purges the selection.

use std::collections::BTreeMap;

use serde_json::json;
use url::Url;

use seasonswap_core::capture::{capture_api_key, Header};
use seasonswap_core::catalog::{Season, SeasonCatalog};
use seasonswap_core::expiry::STALE_INTERVAL;
use seasonswap_core::intercept::{decide_request, Decision, PLATFORM_BASE};
use seasonswap_core::reconcile::reconcile;
use seasonswap_core::reload::ReloadGate;
use seasonswap_core::store::{
    ChangeSet, JsonFileStore, OverrideStore, KEY_API_KEY, KEY_LAST_CHANGED, KEY_SEASON_HASH,
};

const NOW: i64 = 1_700_000_000_000;

fn catalog() -> SeasonCatalog {
    SeasonCatalog::from_seasons(vec![
        Season {
            hash: 1,
            image_path: "/img/seasons/old.jpg".to_string(),
            end_ms: NOW - 86_400_000,
        },
        Season {
            hash: 2,
            image_path: "/img/seasons/current.jpg".to_string(),
            end_ms: NOW + 86_400_000,
        },
    ])
}

/// Run one storage-change event: reconcile against the stored snapshot and
/// apply the returned intent, as the shell does.
fn deliver(store: &mut JsonFileStore, changes: &ChangeSet, now_ms: i64) {
    let current = store.state().unwrap();
    let out = reconcile(&changes.new_values(), &current, now_ms);
    store.set(&out.writes).unwrap();
    store.remove(&out.removals).unwrap();
}

#[test]
fn override_selection_drives_image_redirects() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("store.json"));
    let catalog = catalog();

    // Settings UI selects season 1 (hash arrives as a string).
    let changes = ChangeSet::new()
        .with(KEY_SEASON_HASH, json!("1"))
        .with(KEY_LAST_CHANGED, json!(NOW));
    deliver(&mut store, &changes, NOW);

    let state = store.state().unwrap();
    assert_eq!(state.season_override, Some(1));

    // The page asks for the current season's art; that season has not ended,
    // so its request is left alone even though the override differs.
    let url = Url::parse("https://www.bungie.net/img/seasons/current.jpg").unwrap();
    assert_eq!(
        decide_request(&url, &state, &catalog, NOW),
        Decision::Cancel
    );

    // Flip the override to the live season while the page still shows the
    // ended one: that request gets rewritten.
    let changes = ChangeSet::new()
        .with(KEY_SEASON_HASH, json!(2))
        .with(KEY_LAST_CHANGED, json!(NOW));
    deliver(&mut store, &changes, NOW);
    let state = store.state().unwrap();

    let old = Url::parse("https://www.bungie.net/img/seasons/old.jpg").unwrap();
    assert_eq!(
        decide_request(&old, &state, &catalog, NOW),
        Decision::Redirect {
            target: format!("{PLATFORM_BASE}/img/seasons/current.jpg"),
        }
    );
}

#[test]
fn captured_credential_persists_and_unlocks_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("store.json"));

    // An ordinary platform request carries the key.
    let url = Url::parse("https://www.bungie.net/Platform/Destiny2/Manifest/").unwrap();
    let headers = vec![Header::new("X-API-Key", "abc123")];
    let key = capture_api_key(&url, &headers).expect("key should be captured");
    deliver(
        &mut store,
        &ChangeSet::new().with(KEY_API_KEY, json!(key)),
        NOW,
    );

    // User picks a season; with the key on hand the gate fires once.
    let changes = ChangeSet::new()
        .with(KEY_SEASON_HASH, json!(2))
        .with(KEY_LAST_CHANGED, json!(NOW));
    let previous = store.state().unwrap().season_override;
    deliver(&mut store, &changes, NOW);
    let state = store.state().unwrap();
    assert!(state.has_api_key());

    let mut gate = ReloadGate::new();
    assert!(gate.observe(previous, state.season_override, state.has_api_key(), NOW));
    // Immediate duplicate event is debounced.
    assert!(!gate.observe(previous, state.season_override, state.has_api_key(), NOW + 500));
}

#[test]
fn stale_change_purges_selection_but_keeps_credential() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("store.json"));

    let changes = ChangeSet::new()
        .with(KEY_SEASON_HASH, json!(2))
        .with(KEY_API_KEY, json!("abc123"))
        .with(KEY_LAST_CHANGED, json!(NOW));
    deliver(&mut store, &changes, NOW);

    // The same timestamp arrives again well past the stale interval, e.g. on
    // startup sync.
    let later = NOW + STALE_INTERVAL.as_millis() as i64 + 60_000;
    deliver(
        &mut store,
        &ChangeSet::new().with(KEY_LAST_CHANGED, json!(NOW)),
        later,
    );

    let state = store.state().unwrap();
    assert_eq!(state.season_override, None);
    assert_eq!(state.last_changed_ms, None);
    assert_eq!(state.api_key.as_deref(), Some("abc123"));
}
