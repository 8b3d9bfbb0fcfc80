//! Favorites persistence
//!
//! The favorites list lives in a single JSON file holding the whole list.
//! Every toggle re-reads the file and rewrites it in full; writes go through
//! a temp file and a rename so a crash never leaves a half-written list.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FavoriteStatus, RecipeSummary};

pub const FILE_NAME: &str = "favorites.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Favorites I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Favorites serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed favorites list
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location (~/.local/share/recipetui/favorites.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("recipetui").join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current favorites. A missing or unreadable file reads as empty.
    pub fn load(&self) -> Vec<RecipeSummary> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "cannot read favorites");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<RecipeSummary>>(&contents) {
            Ok(mut list) => {
                dedup_by_id(&mut list);
                list
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "favorites file unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored list
    pub fn save(&self, favorites: &[RecipeSummary]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(favorites)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = ?self.path, count = favorites.len(), "favorites saved");
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.load().iter().any(|fav| fav.id == id)
    }

    /// Add the recipe if absent, remove it if present, then persist
    pub fn toggle(&self, recipe: &RecipeSummary) -> Result<FavoriteStatus, StoreError> {
        let mut favorites = self.load();
        let status = toggle_in(&mut favorites, recipe);
        self.save(&favorites)?;
        tracing::info!(id = %recipe.id, %status, "favorite toggled");
        Ok(status)
    }
}

/// Symmetric toggle on an in-memory list.
///
/// Removal keeps the order of the remaining entries; additions append.
pub fn toggle_in(favorites: &mut Vec<RecipeSummary>, recipe: &RecipeSummary) -> FavoriteStatus {
    match favorites.iter().position(|fav| fav.id == recipe.id) {
        Some(index) => {
            favorites.remove(index);
            FavoriteStatus::Removed
        }
        None => {
            favorites.push(recipe.clone());
            FavoriteStatus::Added
        }
    }
}

/// Keep the first entry for each id
fn dedup_by_id(list: &mut Vec<RecipeSummary>) {
    let mut seen = std::collections::HashSet::new();
    list.retain(|fav| seen.insert(fav.id.clone()));
}
