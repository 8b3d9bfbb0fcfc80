//! Data structures and types for RecipeTUI
//!
//! Contains the shared models used across the application:
//! - **Recipes**: search summaries and full recipe details
//! - **Video**: the renderable tutorial video slot
//! - **Favorites**: outcome of a favorite toggle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ingredient/measure slots a recipe record carries.
pub const INGREDIENT_SLOTS: usize = 20;

// =============================================================================
// Recipe Models
// =============================================================================

/// Minimal recipe record from an ingredient search.
///
/// Also the shape stored in the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [#{}]", self.name, self.id)
    }
}

/// One ingredient/measure slot, exactly as delivered by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(ingredient: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            ingredient: Some(ingredient.into()),
            measure: Some(measure.into()),
        }
    }

    /// Display line for this slot, or `None` when the ingredient is blank.
    pub fn line(&self) -> Option<String> {
        let ingredient = self.ingredient.as_deref().map(str::trim).unwrap_or("");
        if ingredient.is_empty() {
            return None;
        }

        let measure = self.measure.as_deref().map(str::trim).unwrap_or("");
        if measure.is_empty() {
            Some(ingredient.to_string())
        } else {
            Some(format!("{} {}", measure, ingredient))
        }
    }
}

/// Full recipe record from a lookup by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
    /// Slots 1..=20 in order, sparse
    pub ingredients: Vec<IngredientSlot>,
}

impl RecipeDetail {
    /// The favorite record for this recipe
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }

    /// One line per slot with a non-blank ingredient, in slot order.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .take(INGREDIENT_SLOTS)
            .filter_map(IngredientSlot::line)
            .collect()
    }

    /// "Category · Area" tagline, if either is known
    pub fn tagline(&self) -> Option<String> {
        let parts: Vec<&str> = [self.category.as_deref(), self.area.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

impl fmt::Display for RecipeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tagline() {
            Some(tagline) => write!(f, "{} ({})", self.name, tagline),
            None => write!(f, "{}", self.name),
        }
    }
}

// =============================================================================
// Video Models
// =============================================================================

/// Renderable tutorial video slot. Recomputed for every detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoFragment {
    /// A playable video
    Embed { video_id: String, watch_url: String },
    /// Text shown when no video is available
    Placeholder { text: String },
}

impl VideoFragment {
    pub fn embed(video_id: impl Into<String>) -> Self {
        let video_id = video_id.into();
        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        VideoFragment::Embed {
            video_id,
            watch_url,
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        VideoFragment::Placeholder { text: text.into() }
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, VideoFragment::Embed { .. })
    }
}

impl fmt::Display for VideoFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoFragment::Embed { watch_url, .. } => write!(f, "▶ {}", watch_url),
            VideoFragment::Placeholder { text } => write!(f, "{}", text),
        }
    }
}

// =============================================================================
// Favorites
// =============================================================================

/// Outcome of toggling a recipe's favorite status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteStatus {
    Added,
    Removed,
}

impl FavoriteStatus {
    pub fn is_favorite(self) -> bool {
        self == FavoriteStatus::Added
    }
}

impl fmt::Display for FavoriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteStatus::Added => write!(f, "added to favorites"),
            FavoriteStatus::Removed => write!(f, "removed from favorites"),
        }
    }
}
