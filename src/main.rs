//! RecipeTUI - find recipes by ingredient from the terminal
//!
//! Search by ingredient, open a recipe to read it, keep favorites.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! recipetui
//!
//! # CLI mode (for automation)
//! recipetui search chicken
//! recipetui info 52772 --json
//! recipetui favorites toggle 52772
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;

use recipetui::app::{App, AppEvent};
use recipetui::cli::{Cli, Command, ExitCode, Output};
use recipetui::commands;
use recipetui::config::Config;
use recipetui::controller::Controller;
use recipetui::logging::{self, LogTarget};
use recipetui::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref());

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        logging::init(config.log_level(), LogTarget::Stderr);
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        // The TUI owns the screen, so logs go to a file
        logging::init(config.log_level(), LogTarget::default_file());
        run_tui(&config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, config, &output).await,

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, config, &output).await,

        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd.action, config, &output).await,

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config) -> Result<()> {
    let controller = Controller::new(config.recipe_client(), config.video_resolver());
    let mut app = App::new(config.favorites_store());
    tracing::info!(base_url = config.api_base_url(), "starting tui");

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app, &controller).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - applies finished tasks, handles input, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, controller: &Controller) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Results from spawned searches and lookups
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
        app.on_tick();

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only handle key press events (ignore releases on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(task) = app.handle_key(key) {
                        controller.spawn(task, tx.clone());
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }
    }

    Ok(())
}
