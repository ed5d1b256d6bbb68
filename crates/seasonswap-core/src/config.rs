//! Shell configuration.
//!
//! Only shell-side knobs live here. The season catalog, stale interval,
//! endpoint URLs and the reload debounce are compiled-in core data.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuration loaded from `~/.config/seasonswap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Tab URL whose open tabs should reload after an override change.
    pub reload_tab_url: String,
    /// Override-store file location; defaults to the XDG state dir when unset.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            reload_tab_url: "https://www.bungie.net/7/en/Seasons/PreviousSeason".to_string(),
            store_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("seasonswap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SwapConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SwapConfig::default();
        assert_eq!(
            cfg.reload_tab_url,
            "https://www.bungie.net/7/en/Seasons/PreviousSeason"
        );
        assert!(cfg.store_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SwapConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SwapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.reload_tab_url, cfg.reload_tab_url);
        assert_eq!(parsed.store_path, cfg.store_path);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            reload_tab_url = "https://example.com/seasons"
            store_path = "/tmp/store.json"
        "#;
        let cfg: SwapConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.reload_tab_url, "https://example.com/seasons");
        assert_eq!(cfg.store_path.as_deref(), Some(std::path::Path::new("/tmp/store.json")));
    }
}
