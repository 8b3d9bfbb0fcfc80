//! Tutorial video resolution tests
//!
//! Covers both resolver modes against a mocked YouTube search API.

use mockito::{Matcher, Server};
use recipetui::api::YoutubeClient;
use recipetui::models::{IngredientSlot, RecipeDetail, VideoFragment};
use recipetui::video::{VideoResolver, DISABLED_TEXT, NOT_FOUND_TEXT};

fn detail(youtube_url: Option<&str>) -> RecipeDetail {
    RecipeDetail {
        id: "52772".into(),
        name: "Teriyaki Chicken Casserole".into(),
        thumbnail_url: "https://example.com/t.jpg".into(),
        instructions: "Bake.".into(),
        category: Some("Chicken".into()),
        area: Some("Japanese".into()),
        youtube_url: youtube_url.map(str::to_string),
        source_url: None,
        ingredients: vec![IngredientSlot::new("soy sauce", "3/4 cup")],
    }
}

#[tokio::test]
async fn test_active_resolver_takes_first_video() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Teriyaki Chicken Casserole recipe".into()),
            Matcher::UrlEncoded("type".into(), "video".into()),
            Matcher::UrlEncoded("key".into(), "test_key".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"items": [
                {"id": {"kind": "youtube#video", "videoId": "4aZr5hZXP_s"}},
                {"id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"}}
            ]}"#,
        )
        .create_async()
        .await;

    let resolver = VideoResolver::active(YoutubeClient::with_base_url("test_key", server.url()));
    let fragment = resolver.resolve("Teriyaki Chicken Casserole").await;

    mock.assert_async().await;
    assert_eq!(fragment, VideoFragment::embed("4aZr5hZXP_s"));
}

#[tokio::test]
async fn test_active_resolver_no_items_is_placeholder() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let resolver = VideoResolver::active(YoutubeClient::with_base_url("test_key", server.url()));
    let fragment = resolver.resolve("Nothing Soup").await;

    assert_eq!(fragment, VideoFragment::placeholder(NOT_FOUND_TEXT));
}

#[tokio::test]
async fn test_active_resolver_failure_is_placeholder() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#)
        .create_async()
        .await;

    let resolver = VideoResolver::active(YoutubeClient::with_base_url("test_key", server.url()));
    let fragment = resolver.resolve("Chicken Handi").await;

    assert!(!fragment.is_embed());
    assert_eq!(fragment, VideoFragment::placeholder(NOT_FOUND_TEXT));
}

#[tokio::test]
async fn test_resolve_for_prefers_recipe_link() {
    let mut server = Server::new_async().await;

    // Must not be called
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resolver = VideoResolver::active(YoutubeClient::with_base_url("test_key", server.url()));
    let fragment = resolver
        .resolve_for(&detail(Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")))
        .await;

    mock.assert_async().await;
    assert_eq!(fragment, VideoFragment::embed("4aZr5hZXP_s"));
}

#[tokio::test]
async fn test_resolve_for_searches_without_link() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"items": [{"id": {"videoId": "abcdefghijk"}}]}"#)
        .create_async()
        .await;

    let resolver = VideoResolver::active(YoutubeClient::with_base_url("test_key", server.url()));
    let fragment = resolver.resolve_for(&detail(None)).await;

    mock.assert_async().await;
    assert_eq!(fragment, VideoFragment::embed("abcdefghijk"));
}

#[tokio::test]
async fn test_disabled_resolver_always_placeholder() {
    let resolver = VideoResolver::Disabled;

    let fragment = resolver
        .resolve_for(&detail(Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")))
        .await;

    assert_eq!(fragment, VideoFragment::placeholder(DISABLED_TEXT));
}
