//! Recipe detail modal
//!
//! Title, favorite control, ingredients, instructions and the video slot.
//! Content is built fresh from a `DetailView` on every draw.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{RecipeDetail, VideoFragment};
use crate::ui::Theme;

pub const FAVORITE_LABEL: &str = "Save to Favorites";
pub const FAVORITED_LABEL: &str = "Saved to Favorites ✓";

/// Label of the favorite control for the given status
pub fn favorite_label(favorite: bool) -> &'static str {
    if favorite {
        FAVORITED_LABEL
    } else {
        FAVORITE_LABEL
    }
}

/// Content of an open modal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub detail: RecipeDetail,
    pub video: VideoFragment,
    /// Whether the recipe is in the favorites list
    pub favorite: bool,
    /// Scroll offset of the body
    pub scroll: u16,
}

impl DetailView {
    pub fn new(detail: RecipeDetail, video: VideoFragment, favorite: bool) -> Self {
        Self {
            detail,
            video,
            favorite,
            scroll: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Body lines: favorite control, ingredients, instructions, video
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(tagline) = self.detail.tagline() {
            lines.push(Line::from(Span::styled(tagline, Theme::secondary())));
        }
        if !self.detail.thumbnail_url.is_empty() {
            lines.push(Line::from(Span::styled(
                self.detail.thumbnail_url.clone(),
                Theme::dimmed(),
            )));
        }
        lines.push(Line::from(""));

        let control_style = if self.favorite {
            Theme::favorited()
        } else {
            Theme::keybind()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", favorite_label(self.favorite)), control_style),
            Span::styled("  (f)", Theme::dimmed()),
        ]));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("INGREDIENTS", Theme::title())));
        for item in self.detail.ingredient_lines() {
            lines.push(Line::from(vec![
                Span::styled("  • ", Theme::accent()),
                Span::styled(item, Theme::text()),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("INSTRUCTIONS", Theme::title())));
        for paragraph in self.detail.instructions.lines() {
            let paragraph = paragraph.trim();
            if !paragraph.is_empty() {
                lines.push(Line::from(Span::styled(paragraph.to_string(), Theme::text())));
            }
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("TUTORIAL VIDEO", Theme::title())));
        let video_style = if self.video.is_embed() {
            Theme::link()
        } else {
            Theme::dimmed()
        };
        lines.push(Line::from(Span::styled(self.video.to_string(), video_style)));

        if let Some(source) = &self.detail.source_url {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Source: ", Theme::dimmed()),
                Span::styled(source.clone(), Theme::link()),
            ]));
        }

        lines
    }
}

fn modal_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::border_focused())
        .title(Span::styled(title, Theme::title()))
        .title_bottom(Line::from(vec![
            Span::styled(" ESC/x ", Theme::keybind()),
            Span::styled(" close  ", Theme::dimmed()),
            Span::styled(" f ", Theme::keybind()),
            Span::styled(" favorite  ", Theme::dimmed()),
            Span::styled(" ↑↓ ", Theme::keybind()),
            Span::styled(" scroll ", Theme::dimmed()),
        ]))
        .style(Style::default().bg(Theme::BACKGROUND_LIGHT))
}

/// Draw an open modal
pub fn render(frame: &mut Frame, area: Rect, view: &DetailView) {
    frame.render_widget(Clear, area);

    let body = Paragraph::new(view.lines())
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0))
        .block(modal_block(format!(" {} ", view.detail.name)));
    frame.render_widget(body, area);
}

/// Draw the modal in its loading state
pub fn render_loading(frame: &mut Frame, area: Rect, spinner: &str) {
    frame.render_widget(Clear, area);

    let inner_height = area.height.saturating_sub(2);
    let mut lines: Vec<Line> = (0..inner_height / 2).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        format!("{} Loading recipe...", spinner),
        Theme::loading(),
    )));

    let loading = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(modal_block(" RECIPE ".to_string()));
    frame.render_widget(loading, area);
}
