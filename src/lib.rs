//! RecipeTUI - terminal recipe finder
//!
//! Search recipes by ingredient, open one to read its ingredients,
//! instructions and tutorial video, and keep a list of favorites.
//!
//! # Modules
//!
//! - `models` - Recipe summaries, details, video fragments
//! - `api` - API clients (TheMealDB, YouTube)
//! - `video` - Tutorial video resolution
//! - `favorites` - Persistent favorites store
//! - `app` - Application state and transitions
//! - `controller` - Async search and detail flows
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable subcommands

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod favorites;
pub mod logging;
pub mod models;
pub mod ui;
pub mod video;

// Re-export commonly used types
pub use models::{FavoriteStatus, IngredientSlot, RecipeDetail, RecipeSummary, VideoFragment};

pub use api::{MealDbClient, MealDbError, YoutubeClient, YoutubeError};
pub use app::{App, AppEvent, Task};
pub use config::Config;
pub use controller::Controller;
pub use favorites::FavoritesStore;
pub use video::VideoResolver;
