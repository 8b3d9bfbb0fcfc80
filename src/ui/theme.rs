//! Warm kitchen theme for RecipeTUI
//!
//! Color palette and style helpers for the TUI, plus the WCAG contrast
//! helpers the palette is checked against.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #1a1410 (dark roast)
    pub const BACKGROUND: Color = Color::Rgb(0x1a, 0x14, 0x10);

    /// Primary: #ffb347 (saffron)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb3, 0x47);

    /// Secondary: #7fd38a (herb green)
    pub const SECONDARY: Color = Color::Rgb(0x7f, 0xd3, 0x8a);

    /// Accent: #ffe066 (butter)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xe0, 0x66);

    /// Highlight: #ff6f59 (paprika)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x6f, 0x59);

    /// Text: #f2e8dc (flour)
    pub const TEXT: Color = Color::Rgb(0xf2, 0xe8, 0xdc);

    /// Dim: #8a7a6c (muted)
    pub const DIM: Color = Color::Rgb(0x8a, 0x7a, 0x6c);

    /// Error: #ff5c5c
    pub const ERROR: Color = Color::Rgb(0xff, 0x5c, 0x5c);

    /// Link: #7cc4ff
    pub const LINK: Color = Color::Rgb(0x7c, 0xc4, 0xff);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Panels, input box, modal body
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x26, 0x1e, 0x18);

    /// Border color (dim saffron)
    pub const BORDER: Color = Color::Rgb(0x80, 0x5a, 0x24);

    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Selected card (inverted with primary color)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Search input
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::ACCENT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Busy indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Favorite control when the recipe is saved
    pub fn favorited() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Recipe id on a card
    pub fn card_id() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::LINK)
            .add_modifier(Modifier::UNDERLINED)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance of an sRGB color
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let a = relative_luminance(fg.0, fg.1, fg.2);
    let b = relative_luminance(bg.0, bg.1, bg.2);
    let (lighter, darker) = if a > b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AA for large text (3:1)
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// RGB tuple of a ratatui Color (Rgb variant only)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
