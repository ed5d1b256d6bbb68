//! Override state store: wire keys, state snapshot, change sets, and the
//! JSON-file store the CLI shell uses as its persistence collaborator.
//!
//! The decision functions never touch the store directly; they receive an
//! [`OverrideState`] snapshot fetched fresh for each event and return values
//! for the shell to apply.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Canonical numeric override key.
pub const KEY_SEASON_OVERRIDE: &str = "seasonOverride";
/// Write-only alias accepted from the external settings UI.
pub const KEY_SEASON_HASH: &str = "seasonHash";
/// Opaque platform API credential.
pub const KEY_API_KEY: &str = "apiKey";
/// Epoch-millis timestamp of the last override change.
pub const KEY_LAST_CHANGED: &str = "lastChangedDate";

/// Snapshot of the three recognized store fields.
///
/// Immutable for the duration of one decision; an absent `last_changed_ms`
/// means the state is fresh and nothing expires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideState {
    pub season_override: Option<u32>,
    pub api_key: Option<String>,
    pub last_changed_ms: Option<i64>,
}

impl OverrideState {
    /// Build a snapshot from raw store values. Unknown keys and values that
    /// do not coerce are treated as absent, never as errors.
    pub fn from_values(values: &BTreeMap<String, Value>) -> Self {
        Self {
            season_override: values.get(KEY_SEASON_OVERRIDE).and_then(as_season_hash),
            api_key: values.get(KEY_API_KEY).and_then(as_nonempty_string),
            last_changed_ms: values.get(KEY_LAST_CHANGED).and_then(as_epoch_ms),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Coerce a store value to a season hash. The external UI writes the hash as
/// either a JSON number or a numeric string.
pub fn as_season_hash(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a store value to an epoch-millis timestamp.
pub fn as_epoch_ms(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_nonempty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// One entry of a store change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyChange {
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// A change-notification set as the store delivers it: key to old/new pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet(pub BTreeMap<String, KeyChange>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key changing to `new_value` (old value unknown).
    pub fn with(mut self, key: &str, new_value: Value) -> Self {
        self.0.insert(
            key.to_string(),
            KeyChange {
                old_value: None,
                new_value: Some(new_value),
            },
        );
        self
    }

    /// Flatten to the `key -> new value` map the reducer consumes. Keys whose
    /// change carries no new value (deletions) are dropped.
    pub fn new_values(&self) -> BTreeMap<String, Value> {
        self.0
            .iter()
            .filter_map(|(key, change)| {
                change.new_value.clone().map(|v| (key.clone(), v))
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("store parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("store path: {0}")]
    Path(String),
}

/// The persistence contract the core needs from its external collaborator.
pub trait OverrideStore {
    /// All stored values.
    fn values(&self) -> Result<BTreeMap<String, Value>, StoreError>;

    /// Apply a set of writes.
    fn set(&mut self, writes: &BTreeMap<String, Value>) -> Result<(), StoreError>;

    /// Remove the given keys. Missing keys are not an error.
    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError>;

    /// Fresh state snapshot for one decision.
    fn state(&self) -> Result<OverrideState, StoreError> {
        Ok(OverrideState::from_values(&self.values()?))
    }
}

/// Key-value store persisted as a pretty-printed JSON object on disk.
///
/// A missing file reads as an empty store; every mutation rewrites the whole
/// file, which is fine at this size.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Default location: `~/.local/state/seasonswap/override_store.json`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("seasonswap")
            .map_err(|e| StoreError::Path(e.to_string()))?;
        xdg_dirs
            .place_state_file("override_store.json")
            .map_err(StoreError::Io)
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_map(&self, map: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl OverrideStore for JsonFileStore {
    fn values(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        self.read_map()
    }

    fn set(&mut self, writes: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        if writes.is_empty() {
            return Ok(());
        }
        let mut map = self.read_map()?;
        for (key, value) in writes {
            map.insert(key.clone(), value.clone());
        }
        self.write_map(&map)
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut map = self.read_map()?;
        for key in keys {
            map.remove(*key);
        }
        self.write_map(&map)
    }
}
