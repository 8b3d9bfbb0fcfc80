//! TheMealDB client tests
//!
//! Tests ingredient search, lookup by id, and error handling.

use mockito::{Matcher, Server};
use recipetui::api::{MealDbClient, MealDbError};

fn lookup_body() -> &'static str {
    r#"{
        "meals": [{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350F.\r\nCombine soy sauce and water.",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
            "strSource": "",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "water",
            "strMeasure2": "1/2 cup",
            "strIngredient3": "",
            "strMeasure3": " ",
            "strIngredient4": "chicken breasts",
            "strMeasure4": "",
            "strIngredient5": null,
            "strMeasure5": null
        }]
    }"#
}

// =============================================================================
// Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_parses_summaries_in_order() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals": [
                {"strMeal": "Brown Stew Chicken", "strMealThumb": "https://example.com/a.jpg", "idMeal": "52940"},
                {"strMeal": "Chicken Handi", "strMealThumb": "https://example.com/b.jpg", "idMeal": "52795"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let results = client.search_by_ingredient("chicken").await.unwrap();

    mock.assert_async().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "52940");
    assert_eq!(results[0].name, "Brown Stew Chicken");
    assert_eq!(results[1].id, "52795");
    assert_eq!(results[1].thumbnail_url, "https://example.com/b.jpg");
}

#[tokio::test]
async fn test_search_encodes_multi_word_ingredient() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "chicken breast".into()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let results = client.search_by_ingredient("chicken breast").await.unwrap();

    mock.assert_async().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_null_meals_is_empty_not_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let results = client.search_by_ingredient("unobtainium").await;

    assert!(matches!(results, Ok(ref v) if v.is_empty()));
}

#[tokio::test]
async fn test_search_server_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = client.search_by_ingredient("chicken").await.unwrap_err();

    assert!(matches!(err, MealDbError::Status(500)));
}

#[tokio::test]
async fn test_search_invalid_json() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = client.search_by_ingredient("chicken").await.unwrap_err();

    assert!(matches!(err, MealDbError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "egg".into()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(format!("{}/", server.url()));
    client.search_by_ingredient("egg").await.unwrap();

    mock.assert_async().await;
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[tokio::test]
async fn test_lookup_parses_detail() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52772".into()))
        .with_status(200)
        .with_body(lookup_body())
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let detail = client.lookup_by_id("52772").await.unwrap();

    mock.assert_async().await;

    assert_eq!(detail.id, "52772");
    assert_eq!(detail.name, "Teriyaki Chicken Casserole");
    assert_eq!(detail.category.as_deref(), Some("Chicken"));
    assert_eq!(detail.area.as_deref(), Some("Japanese"));
    assert_eq!(
        detail.youtube_url.as_deref(),
        Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
    );
    // Blank source reads as absent
    assert_eq!(detail.source_url, None);
    assert!(detail.instructions.starts_with("Preheat oven"));
    assert_eq!(detail.ingredients.len(), 20);
}

#[tokio::test]
async fn test_lookup_ingredient_lines_skip_blank_slots() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(lookup_body())
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let detail = client.lookup_by_id("52772").await.unwrap();

    assert_eq!(
        detail.ingredient_lines(),
        vec![
            "3/4 cup soy sauce".to_string(),
            "1/2 cup water".to_string(),
            "chicken breasts".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_lookup_unknown_id_is_not_found() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = client.lookup_by_id("1").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_lookup_server_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = client.lookup_by_id("52772").await.unwrap_err();

    assert!(matches!(err, MealDbError::Status(503)));
    assert!(!err.is_not_found());
}
