//! CLI Command Handlers
//!
//! Implements all CLI commands on top of the same clients and store the TUI
//! uses. Each handler takes its args, the loaded config and Output, and
//! returns an ExitCode.

use serde::Serialize;

use crate::api::MealDbError;
use crate::app::{MSG_EMPTY_INPUT, MSG_FAILURE, MSG_NO_RESULTS, MSG_SAVE_FAILED};
use crate::cli::{ExitCode, FavoritesAction, InfoCmd, Output, SearchCmd, ToggleResponse};
use crate::config::Config;
use crate::models::{RecipeDetail, VideoFragment};
use crate::video::VideoResolver;

pub const MSG_NOT_FOUND: &str = "Recipe not found.";

/// Map a recipe API failure to an exit code
fn api_exit_code(e: &MealDbError) -> ExitCode {
    if e.is_not_found() {
        ExitCode::NotFound
    } else {
        ExitCode::NetworkError
    }
}

/// User-facing text for a recipe API failure. The error itself is only logged.
fn api_error_message(e: &MealDbError) -> &'static str {
    if e.is_not_found() {
        MSG_NOT_FOUND
    } else {
        MSG_FAILURE
    }
}

fn api_failure(output: &Output, e: MealDbError) -> ExitCode {
    if e.is_not_found() {
        tracing::debug!(error = %e, "recipe not found");
    } else {
        tracing::error!(error = %e, "recipe request failed");
    }
    output.error(api_error_message(&e), api_exit_code(&e))
}

fn print_or_fail<T: Serialize>(output: &Output, data: T) -> ExitCode {
    match output.print(data) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!(error = %e, "cannot serialize output");
            output.error(MSG_FAILURE, ExitCode::Error)
        }
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, config: &Config, output: &Output) -> ExitCode {
    let term = cmd.ingredient.trim();
    if term.is_empty() {
        return output.error(MSG_EMPTY_INPUT, ExitCode::InvalidArgs);
    }

    let client = config.recipe_client();
    output.info(format!("Searching recipes with: {}", term));

    match client.search_by_ingredient(term).await {
        Ok(results) if results.is_empty() => output.error(MSG_NO_RESULTS, ExitCode::NotFound),
        Ok(mut results) => {
            results.truncate(cmd.limit);
            print_or_fail(output, &results)
        }
        Err(e) => api_failure(output, e),
    }
}

// =============================================================================
// Info Command
// =============================================================================

/// Full recipe as printed by `info`
#[derive(Debug, Serialize)]
pub struct RecipeInfo {
    #[serde(flatten)]
    pub detail: RecipeDetail,
    /// Display lines, blank slots dropped
    pub ingredient_lines: Vec<String>,
    pub video: VideoFragment,
    pub favorite: bool,
}

pub async fn info_cmd(cmd: InfoCmd, config: &Config, output: &Output) -> ExitCode {
    let id = cmd.id.trim();
    if id.is_empty() {
        return output.error("Recipe id must not be empty", ExitCode::InvalidArgs);
    }

    let client = config.recipe_client();
    output.info(format!("Getting recipe: {}", id));

    let detail = match client.lookup_by_id(id).await {
        Ok(detail) => detail,
        Err(e) => return api_failure(output, e),
    };

    let resolver = if cmd.no_video {
        VideoResolver::Disabled
    } else {
        config.video_resolver()
    };
    let video = resolver.resolve_for(&detail).await;
    let favorite = config.favorites_store().contains(&detail.id);

    let info = RecipeInfo {
        ingredient_lines: detail.ingredient_lines(),
        detail,
        video,
        favorite,
    };

    print_or_fail(output, &info)
}

// =============================================================================
// Favorites Commands
// =============================================================================

pub async fn favorites_cmd(action: FavoritesAction, config: &Config, output: &Output) -> ExitCode {
    match action {
        FavoritesAction::List => favorites_list_cmd(config, output),
        FavoritesAction::Toggle { id } => favorites_toggle_cmd(&id, config, output).await,
    }
}

fn favorites_list_cmd(config: &Config, output: &Output) -> ExitCode {
    let favorites = config.favorites_store().load();
    print_or_fail(output, &favorites)
}

async fn favorites_toggle_cmd(id: &str, config: &Config, output: &Output) -> ExitCode {
    let id = id.trim();
    if id.is_empty() {
        return output.error("Recipe id must not be empty", ExitCode::InvalidArgs);
    }

    let store = config.favorites_store();

    // Removal needs no lookup; the stored record is enough
    let summary = match store.load().into_iter().find(|fav| fav.id == id) {
        Some(existing) => existing,
        None => {
            output.info(format!("Looking up recipe: {}", id));
            match config.recipe_client().lookup_by_id(id).await {
                Ok(detail) => detail.summary(),
                Err(e) => return api_failure(output, e),
            }
        }
    };

    match store.toggle(&summary) {
        Ok(status) => {
            output.info(format!("{}: {}", summary.name, status));
            let response = ToggleResponse {
                id: summary.id,
                name: summary.name,
                favorite: status.is_favorite(),
            };
            print_or_fail(output, &response)
        }
        Err(e) => {
            tracing::warn!(error = %e, "favorites write failed");
            output.error(MSG_SAVE_FAILED, ExitCode::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeSummary;

    fn quiet() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            // Unroutable; any request would fail as a network error
            api_base_url: Some("http://127.0.0.1:9".into()),
            favorites_path: Some(dir.path().join("favorites.json")),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_blank_search_is_invalid_args() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = SearchCmd {
            ingredient: "   ".into(),
            limit: 10,
        };
        assert_eq!(search_cmd(cmd, &config_in(&dir), &quiet()).await, ExitCode::InvalidArgs);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = SearchCmd {
            ingredient: "chicken".into(),
            limit: 10,
        };
        assert_eq!(search_cmd(cmd, &config_in(&dir), &quiet()).await, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_toggle_removes_stored_favorite_without_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let store = config.favorites_store();
        store
            .save(&[RecipeSummary {
                id: "52772".into(),
                name: "Teriyaki Chicken Casserole".into(),
                thumbnail_url: "https://example.com/t.jpg".into(),
            }])
            .unwrap();

        let code = favorites_cmd(FavoritesAction::Toggle { id: "52772".into() }, &config, &quiet()).await;

        assert_eq!(code, ExitCode::Success);
        assert!(store.load().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_shows_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let err = config_in(&dir)
            .recipe_client()
            .search_by_ingredient("chicken")
            .await
            .unwrap_err();

        let human = Output {
            json: false,
            quiet: false,
        };
        let text = human
            .error_text(api_error_message(&err), api_exit_code(&err))
            .unwrap();

        assert_eq!(text, format!("Error: {}", MSG_FAILURE));
        assert!(!text.contains("127.0.0.1"));
    }

    #[test]
    fn test_not_found_shows_fixed_message() {
        let err = MealDbError::NotFound("52772".into());
        let json = quiet().error_text(api_error_message(&err), api_exit_code(&err)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], MSG_NOT_FOUND);
        assert_eq!(value["exit_code"], 4);
    }

    #[test]
    fn test_not_found_maps_to_exit_code() {
        assert_eq!(api_exit_code(&MealDbError::NotFound("1".into())), ExitCode::NotFound);
        assert_eq!(api_exit_code(&MealDbError::Status(500)), ExitCode::NetworkError);
    }
}
