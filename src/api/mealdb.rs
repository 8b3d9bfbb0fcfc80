//! TheMealDB API client
//!
//! Ingredient search and recipe lookup.
//! API docs: https://www.themealdb.com/api.php

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::models::{IngredientSlot, RecipeDetail, RecipeSummary, INGREDIENT_SLOTS};

/// Public endpoint (free test key "1")
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// TheMealDB API error types
#[derive(Error, Debug)]
pub enum MealDbError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No recipe found for id {0}")]
    NotFound(String),
}

impl MealDbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MealDbError::NotFound(_))
    }
}

/// TheMealDB API client
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClient {
    /// Create a client for the public endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single GET, no retries
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, MealDbError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "mealdb request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MealDbError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| MealDbError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    /// Recipes that use the given ingredient.
    ///
    /// An empty vector means the API found nothing; that is not an error.
    pub async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, MealDbError> {
        let endpoint = format!("filter.php?i={}", urlencoding::encode(ingredient));
        let response: MealsResponse<MealSummaryRaw> = self.get(&endpoint).await?;

        let results: Vec<RecipeSummary> = response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(MealSummaryRaw::into_summary)
            .collect();

        tracing::debug!(ingredient, count = results.len(), "search finished");
        Ok(results)
    }

    /// Full recipe by id
    pub async fn lookup_by_id(&self, id: &str) -> Result<RecipeDetail, MealDbError> {
        let endpoint = format!("lookup.php?i={}", urlencoding::encode(id));
        let response: MealsResponse<MealDetailRaw> = self.get(&endpoint).await?;

        response
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetailRaw::into_detail)
            .ok_or_else(|| MealDbError::NotFound(id.to_string()))
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// `meals` is `null` when nothing matched
#[derive(Debug, Deserialize)]
struct MealsResponse<T> {
    meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct MealSummaryRaw {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
}

impl MealSummaryRaw {
    fn into_summary(self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name,
            thumbnail_url: self.thumbnail.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MealDetailRaw {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(rename = "strSource")]
    source: Option<String>,
    // strIngredient1..20 / strMeasure1..20 and anything else
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

impl MealDetailRaw {
    fn slot_field(&self, prefix: &str, index: usize) -> Option<String> {
        self.rest
            .get(&format!("{}{}", prefix, index))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }

    fn into_detail(self) -> RecipeDetail {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .map(|i| IngredientSlot {
                ingredient: self.slot_field("strIngredient", i),
                measure: self.slot_field("strMeasure", i),
            })
            .collect();

        RecipeDetail {
            id: self.id,
            name: self.name,
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            category: non_blank(self.category),
            area: non_blank(self.area),
            youtube_url: non_blank(self.youtube),
            source_url: non_blank(self.source),
            ingredients,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_raw_collects_slots() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strInstructions": "Preheat oven to 350 F.",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strYoutube": "",
            "strSource": null,
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "",
            "strMeasure2": "",
            "strIngredient3": null,
            "strMeasure3": null
        }"#;

        let raw: MealDetailRaw = serde_json::from_str(json).unwrap();
        let detail = raw.into_detail();

        assert_eq!(detail.id, "52772");
        assert_eq!(detail.ingredients.len(), INGREDIENT_SLOTS);
        assert_eq!(detail.ingredients[0], IngredientSlot::new("soy sauce", "3/4 cup"));
        assert_eq!(detail.ingredients[1].ingredient.as_deref(), Some(""));
        assert_eq!(detail.ingredients[2], IngredientSlot::default());
        assert!(detail.youtube_url.is_none());
        assert!(detail.source_url.is_none());
        assert_eq!(detail.ingredient_lines(), vec!["3/4 cup soy sauce"]);
    }

    #[test]
    fn test_null_meals_deserializes_to_none() {
        let raw: MealsResponse<MealSummaryRaw> = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(raw.meals.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = MealDbClient::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}
