//! Tutorial video resolution
//!
//! Resolving a video is best-effort enrichment of the detail view: every
//! path returns a `VideoFragment`, failures become placeholders.

use regex::Regex;

use crate::api::YoutubeClient;
use crate::models::{RecipeDetail, VideoFragment};

pub const DISABLED_TEXT: &str = "Video lookup is currently disabled.";
pub const NOT_FOUND_TEXT: &str = "No tutorial video found.";

/// Video resolver mode, chosen once at startup
#[derive(Debug, Clone, Default)]
pub enum VideoResolver {
    /// Always returns the fixed placeholder
    #[default]
    Disabled,
    /// Searches YouTube for "<name> recipe"
    Active(YoutubeClient),
}

impl VideoResolver {
    pub fn active(client: YoutubeClient) -> Self {
        VideoResolver::Active(client)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, VideoResolver::Active(_))
    }

    /// Video for a recipe name. Never fails.
    pub async fn resolve(&self, recipe_name: &str) -> VideoFragment {
        let client = match self {
            VideoResolver::Disabled => {
                tracing::debug!(recipe = recipe_name, "video lookup disabled");
                return VideoFragment::placeholder(DISABLED_TEXT);
            }
            VideoResolver::Active(client) => client,
        };

        let query = format!("{} recipe", recipe_name);
        match client.search_video_ids(&query).await {
            Ok(ids) => match ids.into_iter().next() {
                Some(id) => VideoFragment::embed(id),
                None => {
                    tracing::debug!(recipe = recipe_name, "no video candidates");
                    VideoFragment::placeholder(NOT_FOUND_TEXT)
                }
            },
            Err(e) => {
                tracing::warn!(recipe = recipe_name, error = %e, "video lookup failed");
                VideoFragment::placeholder(NOT_FOUND_TEXT)
            }
        }
    }

    /// Video for a full recipe: its own link when it carries a usable one,
    /// otherwise a lookup by name. Never fails.
    ///
    /// A disabled resolver ignores the recipe's link as well.
    pub async fn resolve_for(&self, detail: &RecipeDetail) -> VideoFragment {
        if self.is_active() {
            if let Some(id) = detail.youtube_url.as_deref().and_then(extract_video_id) {
                return VideoFragment::embed(id);
            }
        }
        self.resolve(&detail.name).await
    }
}

/// Extract the 11-character video id from a YouTube URL
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = Regex::new(r"(?:[?&]v=|youtu\.be/|/embed/|/shorts/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
