//! API clients for external services
//!
//! - TheMealDB: ingredient search and recipe lookup
//! - YouTube: tutorial video search

pub mod mealdb;
pub mod youtube;

pub use mealdb::{MealDbClient, MealDbError};
pub use youtube::{YoutubeClient, YoutubeError};
