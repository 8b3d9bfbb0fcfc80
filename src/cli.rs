//! CLI - Command Line Interface for RecipeTUI
//!
//! Every lookup the TUI does is scriptable. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! recipetui search chicken --json
//! recipetui info 52772
//! recipetui favorites toggle 52772
//! recipetui favorites list
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// General error (including favorites write failures)
    Error = 1,
    InvalidArgs = 2,
    /// Transport failure or non-success status
    NetworkError = 3,
    /// No recipe matched
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// RecipeTUI - find recipes by ingredient
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "recipetui",
    version,
    about = "Find recipes by ingredient, read them, keep favorites",
    long_about = "A terminal recipe finder backed by TheMealDB.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  recipetui                          Launch interactive TUI\n\
                  recipetui search chicken           Recipes using chicken\n\
                  recipetui info 52772 --json        Full recipe as JSON\n\
                  recipetui favorites list           Saved favorites"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search recipes by ingredient
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show a full recipe
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List or toggle favorites
    #[command(visible_alias = "fav")]
    Favorites(FavoritesCmd),
}

/// Search recipes that use an ingredient
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Ingredient, e.g. "chicken breast"
    #[arg(required = true)]
    pub ingredient: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "50")]
    pub limit: usize,
}

/// Show a full recipe with ingredients, instructions and video
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Recipe id (e.g. 52772)
    #[arg(required = true)]
    pub id: String,

    /// Skip the tutorial video lookup
    #[arg(long)]
    pub no_video: bool,
}

#[derive(Args, Debug)]
pub struct FavoritesCmd {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum FavoritesAction {
    /// List saved favorites
    #[command(visible_alias = "ls")]
    List,

    /// Add a recipe if absent, remove it if present
    #[command(visible_alias = "t")]
    Toggle {
        /// Recipe id
        id: String,
    },
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Favorite toggle response
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub id: String,
    pub name: String,
    pub favorite: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        if let Some(text) = self.error_text(&msg.into(), code) {
            eprintln!("{}", text);
        }
        code
    }

    /// What `error` writes to stderr, if anything
    pub fn error_text(&self, msg: &str, code: ExitCode) -> Option<String> {
        if self.json {
            serde_json::to_string_pretty(&JsonOutput::<()>::error_msg(msg, code)).ok()
        } else if !self.quiet {
            Some(format!("Error: {}", msg))
        } else {
            None
        }
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
