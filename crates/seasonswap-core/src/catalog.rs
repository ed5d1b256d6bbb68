//! Built-in season catalog.
//!
//! Each season is a time-bounded content period keyed by its platform hash,
//! with the progress-page background image the client loads for it and the
//! date the season's natural lifetime ends. The table is compiled in and
//! never mutated at runtime.

use serde::{Deserialize, Serialize};

/// One catalog record. Hashes and image paths are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Platform identifier for the season.
    pub hash: u32,
    /// Absolute path of the season's progress-page background image.
    pub image_path: String,
    /// End of the season's natural lifetime, epoch milliseconds.
    pub end_ms: i64,
}

/// Ordered, immutable season table with the two lookups the decision
/// functions need.
#[derive(Debug, Clone)]
pub struct SeasonCatalog {
    seasons: Vec<Season>,
}

impl SeasonCatalog {
    /// The compiled-in catalog, oldest season first.
    pub fn builtin() -> Self {
        let seasons = [
            (3612906877, "/img/destiny_content/seasons/season9_progress.jpg", 1583798400000),
            (2809059426, "/img/destiny_content/seasons/season10_progress.jpg", 1591660800000),
            (1594037542, "/img/destiny_content/seasons/season11_progress.jpg", 1604966400000),
            (4095983233, "/img/destiny_content/seasons/season12_progress.jpg", 1612828800000),
            (2898113174, "/img/destiny_content/seasons/season13_progress.jpg", 1620691200000),
            (2757297979, "/img/destiny_content/seasons/season14_progress.jpg", 1629763200000),
            (3544399024, "/img/destiny_content/seasons/season15_progress.jpg", 1645488000000),
            (1425304540, "/img/destiny_content/seasons/season16_progress.jpg", 1653350400000),
        ]
        .into_iter()
        .map(|(hash, image_path, end_ms)| Season {
            hash,
            image_path: image_path.to_string(),
            end_ms,
        })
        .collect();
        Self { seasons }
    }

    /// Build a catalog from explicit records (used by tests).
    pub fn from_seasons(seasons: Vec<Season>) -> Self {
        Self { seasons }
    }

    pub fn find_by_hash(&self, hash: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.hash == hash)
    }

    pub fn find_by_image_path(&self, path: &str) -> Option<&Season> {
        self.seasons.iter().find(|s| s.image_path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Season> {
        self.seasons.iter()
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}
