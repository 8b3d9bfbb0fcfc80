//! Result and favorites lists
//!
//! Each recipe renders as a two-line card keyed by its id.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Pane, SearchPhase};
use crate::models::RecipeSummary;
use crate::ui::Theme;

/// One card per recipe, in order
pub fn cards(recipes: &[RecipeSummary], selected: usize) -> Vec<ListItem<'_>> {
    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▸ " } else { "  " };

            let title = Line::from(vec![
                Span::styled(marker, if is_selected { Theme::accent() } else { Theme::dimmed() }),
                Span::styled(
                    recipe.name.as_str(),
                    if is_selected { Theme::highlighted() } else { Theme::text() },
                ),
            ]);
            let meta = Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("#{}", recipe.id), Theme::card_id()),
                Span::raw("  "),
                Span::styled(recipe.thumbnail_url.as_str(), Theme::dimmed()),
            ]);

            ListItem::new(vec![title, meta])
        })
        .collect()
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused { Theme::border_focused() } else { Theme::border() })
        .title(Span::styled(title, Theme::title()))
}

fn render_centered(frame: &mut Frame, area: Rect, text: String, style: Style) {
    let para = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn render_list(frame: &mut Frame, area: Rect, recipes: &[RecipeSummary], selected: usize) {
    let list = List::new(cards(recipes, selected)).style(Theme::text());
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Search results pane
pub fn render_results(frame: &mut Frame, area: Rect, app: &App, spinner: &str) {
    let search = &app.search;
    let block = pane_block(format!(" RESULTS ({}) ", search.results.len()), app.pane == Pane::Results);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match search.phase {
        SearchPhase::Searching => {
            render_centered(frame, inner, format!("{} Searching recipes...", spinner), Theme::loading());
        }
        SearchPhase::Idle => {
            render_centered(
                frame,
                inner,
                "Press / and type an ingredient to find recipes".to_string(),
                Theme::dimmed(),
            );
        }
        // The message area explains an empty list
        SearchPhase::ErrorShown => {}
        SearchPhase::ResultsShown => {
            render_list(frame, inner, &search.results, search.list.selected);
        }
    }
}

/// Saved favorites pane
pub fn render_favorites(frame: &mut Frame, area: Rect, app: &App) {
    let favorites = &app.favorites;
    let block = pane_block(format!(" ♥ FAVORITES ({}) ", favorites.items.len()), true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if favorites.items.is_empty() {
        render_centered(
            frame,
            inner,
            "No favorites yet. Open a recipe and press f to save it.".to_string(),
            Theme::dimmed(),
        );
        return;
    }

    render_list(frame, inner, &favorites.items, favorites.list.selected);
}
