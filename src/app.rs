//! App state and core application logic
//!
//! Owns every UI surface (search input, results, favorites, message area,
//! busy indicator, detail modal) and implements the state transitions.
//! Network work never happens here: transitions that need it return a
//! [`Task`], and the finished work comes back as an [`AppEvent`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::api::MealDbError;
use crate::favorites::FavoritesStore;
use crate::models::{RecipeDetail, RecipeSummary, VideoFragment};
use crate::ui::detail::DetailView;

pub const MSG_EMPTY_INPUT: &str = "Please enter an ingredient.";
pub const MSG_NO_RESULTS: &str = "No recipes found. Try another ingredient.";
pub const MSG_FAILURE: &str = "Oops! Something went wrong. Please try again.";
pub const MSG_SAVE_FAILED: &str = "Could not save favorites.";

// =============================================================================
// State Enums
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// Which list the content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Results,
    Favorites,
}

/// Search flow: Idle → Searching → (ResultsShown | ErrorShown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    ResultsShown,
    ErrorShown,
}

/// Detail flow. The modal opens as soon as a recipe is picked and shows the
/// busy indicator until the lookup finishes; a failed lookup closes it again.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Loading { recipe_id: String },
    Open(Box<DetailView>),
}

impl Modal {
    pub fn is_closed(&self) -> bool {
        matches!(self, Modal::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Modal::Loading { .. })
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            Modal::Open(view) => Some(view),
            _ => None,
        }
    }
}

// =============================================================================
// Tasks and Events
// =============================================================================

/// Async work requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Search { generation: u64, term: String },
    LoadDetail { generation: u64, recipe_id: String },
}

/// Completed async work, fed back through [`App::apply`]
#[derive(Debug)]
pub enum AppEvent {
    SearchFinished {
        generation: u64,
        result: Result<Vec<RecipeSummary>, MealDbError>,
    },
    DetailFinished {
        generation: u64,
        result: Result<(RecipeDetail, VideoFragment), MealDbError>,
    },
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// Update length, clamping the selection
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Shared list navigation keys. Returns true if the key was consumed.
    fn handle_nav_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::PageUp => self.page_up(10),
            KeyCode::PageDown => self.page_down(10),
            KeyCode::Home | KeyCode::Char('g') => self.first(),
            KeyCode::End | KeyCode::Char('G') => self.last(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Search input and results
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Cursor position in query, in chars
    pub cursor: usize,
    /// Current results; replaced wholesale
    pub results: Vec<RecipeSummary>,
    pub list: ListState,
    pub phase: SearchPhase,
    /// Latest issued search request
    pub generation: u64,
}

impl SearchState {
    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.query.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Query split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index())
    }

    fn set_results(&mut self, results: Vec<RecipeSummary>) {
        self.list = ListState::new(results.len());
        self.results = results;
    }

    fn clear_results(&mut self) {
        self.set_results(Vec::new());
    }

    pub fn selected_result(&self) -> Option<&RecipeSummary> {
        self.results.get(self.list.selected)
    }
}

/// Saved favorites, as last read from the store
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub items: Vec<RecipeSummary>,
    pub list: ListState,
}

impl FavoritesState {
    fn set_items(&mut self, items: Vec<RecipeSummary>) {
        self.list.set_len(items.len());
        self.items = items;
    }

    pub fn selected(&self) -> Option<&RecipeSummary> {
        self.items.get(self.list.selected)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    pub input_mode: InputMode,
    pub pane: Pane,

    pub search: SearchState,
    pub favorites: FavoritesState,

    /// Message area (validation, empty results, flow failures)
    pub message: Option<String>,
    /// Transient status-bar notice, cleared on the next key press
    pub notice: Option<String>,

    pub modal: Modal,
    /// Latest issued detail request; advanced on close as well
    pub detail_generation: u64,

    /// Spinner frame counter
    pub tick: usize,

    store: FavoritesStore,
}

impl App {
    pub fn new(store: FavoritesStore) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            pane: Pane::Results,
            search: SearchState::default(),
            favorites: FavoritesState::default(),
            message: None,
            notice: None,
            modal: Modal::Closed,
            detail_generation: 0,
            tick: 0,
            store,
        }
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance the spinner
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Busy indicator visible anywhere
    pub fn is_busy(&self) -> bool {
        self.search.phase == SearchPhase::Searching || self.modal.is_loading()
    }

    /// Focus search input
    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
        self.pane = Pane::Results;
        self.search.cursor_end();
    }

    // -------------------------------------------------------------------------
    // Search Flow
    // -------------------------------------------------------------------------

    /// Submit the search input.
    ///
    /// Blank input shows the validation message without a request.
    pub fn submit_search(&mut self) -> Option<Task> {
        let term = self.search.query.trim().to_string();
        self.pane = Pane::Results;

        if term.is_empty() {
            self.search.clear_results();
            self.search.phase = SearchPhase::ErrorShown;
            self.message = Some(MSG_EMPTY_INPUT.to_string());
            return None;
        }

        self.search.clear_results();
        self.message = None;
        self.search.phase = SearchPhase::Searching;
        self.search.generation = self.search.generation.wrapping_add(1);

        tracing::debug!(term = %term, generation = self.search.generation, "search submitted");
        Some(Task::Search {
            generation: self.search.generation,
            term,
        })
    }

    fn finish_search(&mut self, generation: u64, result: Result<Vec<RecipeSummary>, MealDbError>) {
        if generation != self.search.generation {
            tracing::debug!(generation, latest = self.search.generation, "dropping stale search result");
            return;
        }

        match result {
            Ok(results) if !results.is_empty() => {
                self.search.set_results(results);
                self.search.phase = SearchPhase::ResultsShown;
                self.message = None;
            }
            Ok(_) => {
                self.search.clear_results();
                self.search.phase = SearchPhase::ErrorShown;
                self.message = Some(MSG_NO_RESULTS.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                self.show_failure();
            }
        }
    }

    /// Generic failure: list cleared, message shown, nothing left busy
    fn show_failure(&mut self) {
        self.search.clear_results();
        self.search.phase = SearchPhase::ErrorShown;
        self.message = Some(MSG_FAILURE.to_string());
    }

    // -------------------------------------------------------------------------
    // Detail Flow
    // -------------------------------------------------------------------------

    /// Open the modal in its loading state and request the recipe
    pub fn open_detail(&mut self, recipe_id: impl Into<String>) -> Task {
        let recipe_id = recipe_id.into();
        self.input_mode = InputMode::Normal;
        self.detail_generation = self.detail_generation.wrapping_add(1);
        self.modal = Modal::Loading {
            recipe_id: recipe_id.clone(),
        };

        tracing::debug!(%recipe_id, generation = self.detail_generation, "detail requested");
        Task::LoadDetail {
            generation: self.detail_generation,
            recipe_id,
        }
    }

    fn finish_detail(
        &mut self,
        generation: u64,
        result: Result<(RecipeDetail, VideoFragment), MealDbError>,
    ) {
        if generation != self.detail_generation || !self.modal.is_loading() {
            tracing::debug!(generation, latest = self.detail_generation, "dropping stale detail result");
            return;
        }

        match result {
            Ok((detail, video)) => {
                let favorite = self.store.contains(&detail.id);
                self.modal = Modal::Open(Box::new(DetailView::new(detail, video, favorite)));
            }
            Err(e) => {
                tracing::error!(error = %e, "detail lookup failed");
                self.close_modal();
                self.show_failure();
            }
        }
    }

    /// Hide the modal and drop its content. Any in-flight lookup is ignored.
    pub fn close_modal(&mut self) {
        if !self.modal.is_closed() {
            self.detail_generation = self.detail_generation.wrapping_add(1);
        }
        self.modal = Modal::Closed;
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Toggle the open recipe's favorite status and refresh the control
    pub fn toggle_favorite(&mut self) {
        let summary = match &self.modal {
            Modal::Open(view) => view.detail.summary(),
            _ => return,
        };

        let favorite = match self.store.toggle(&summary) {
            Ok(status) => status.is_favorite(),
            Err(e) => {
                tracing::warn!(id = %summary.id, error = %e, "favorites not saved");
                self.notice = Some(MSG_SAVE_FAILED.to_string());
                self.store.contains(&summary.id)
            }
        };

        if let Modal::Open(view) = &mut self.modal {
            view.favorite = favorite;
        }
        if self.pane == Pane::Favorites {
            self.reload_favorites();
        }
    }

    pub fn reload_favorites(&mut self) {
        let items = self.store.load();
        self.favorites.set_items(items);
    }

    /// Switch between the results and favorites panes
    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Results => {
                self.reload_favorites();
                Pane::Favorites
            }
            Pane::Favorites => Pane::Results,
        };
    }

    // -------------------------------------------------------------------------
    // Event Application
    // -------------------------------------------------------------------------

    /// Apply a finished task
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished { generation, result } => self.finish_search(generation, result),
            AppEvent::DetailFinished { generation, result } => self.finish_detail(generation, result),
        }
    }

    // -------------------------------------------------------------------------
    // Input Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning any async work it requests
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Task> {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if !self.modal.is_closed() {
            self.handle_modal_key(key);
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    /// Handle mouse event; a click outside the modal closes it
    pub fn handle_mouse(&mut self, event: MouseEvent, screen: Rect) {
        if self.modal.is_closed() {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            let modal = crate::ui::modal_area(screen);
            if !modal.contains(Position::new(event.column, event.row)) {
                self.close_modal();
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => self.close_modal(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('f') => self.toggle_favorite(),
            KeyCode::Up | KeyCode::Char('k') => {
                if let Modal::Open(view) = &mut self.modal {
                    view.scroll_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Modal::Open(view) = &mut self.modal {
                    view.scroll_down();
                }
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Task> {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return self.submit_search();
            }
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => {}
        }
        None
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Task> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                return None;
            }
            KeyCode::Char('v') => {
                self.toggle_pane();
                return None;
            }
            KeyCode::Esc => {
                self.pane = Pane::Results;
                return None;
            }
            _ => {}
        }

        match self.pane {
            Pane::Results => {
                if key.code == KeyCode::Enter {
                    let id = self.search.selected_result().map(|r| r.id.clone())?;
                    return Some(self.open_detail(id));
                }
                self.search.list.handle_nav_key(key.code);
            }
            Pane::Favorites => {
                if key.code == KeyCode::Enter {
                    let id = self.favorites.selected().map(|r| r.id.clone())?;
                    return Some(self.open_detail(id));
                }
                self.favorites.list.handle_nav_key(key.code);
            }
        }
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
