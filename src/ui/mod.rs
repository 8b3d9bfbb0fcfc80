//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first; the mouse only dismisses the modal.

pub mod detail;
pub mod results;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Modal, Pane};

/// Braille spinner frames for the busy indicator
pub const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Modal rectangle for a given screen: 80% x 85%, centered
pub fn modal_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(85)])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(vertical);
    modal
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + search
            Constraint::Min(1),    // Results / favorites
            Constraint::Length(3), // Message area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let spinner = spinner_frame(app.tick);

    render_header(frame, chunks[0], app);
    match app.pane {
        Pane::Results => results::render_results(frame, chunks[1], app, spinner),
        Pane::Favorites => results::render_favorites(frame, chunks[1], app),
    }
    render_message(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    match &app.modal {
        Modal::Closed => {}
        Modal::Loading { .. } => detail::render_loading(frame, modal_area(area), spinner),
        Modal::Open(view) => detail::render(frame, modal_area(area), view),
    }
}

/// Logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("RECIPE", Theme::title()),
        Span::styled("TUI", Style::default().fg(Theme::SECONDARY).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let search_text = if editing {
        let (before, after) = app.search.split_at_cursor();
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Type / to search by ingredient...".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let search_box = Paragraph::new(search_text)
        .style(if editing { Theme::input().fg(Theme::PRIMARY) } else { Theme::input() })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing { Theme::border_focused() } else { Theme::border() })
                .title(Span::styled(" INGREDIENT ", Theme::title())),
        );
    frame.render_widget(search_box, chunks[1]);
}

/// Message area: validation, empty results, failures
fn render_message(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.message.as_deref().unwrap_or("");
    let style = match app.message.as_deref() {
        Some(crate::app::MSG_FAILURE) => Theme::error(),
        _ => Theme::accent(),
    };

    let message = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        );
    frame.render_widget(message, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let mut spans = vec![mode, Span::raw(" ")];
    if app.is_busy() {
        spans.push(Span::styled(format!("{} ", spinner_frame(app.tick)), Theme::loading()));
    }
    match &app.notice {
        Some(notice) => spans.push(Span::styled(notice.as_str(), Theme::error())),
        None => spans.push(Span::styled(
            "q:quit  /:search  ↵:open  v:favorites  ESC:back",
            Theme::dimmed(),
        )),
    }

    let status = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_area_is_centered_inside() {
        let screen = Rect::new(0, 0, 100, 40);
        let modal = modal_area(screen);
        assert_eq!(modal.width, 80);
        assert_eq!(modal.height, 34);
        assert_eq!(modal.x, 10);
        assert_eq!(modal.y, 3);
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len()));
    }
}
