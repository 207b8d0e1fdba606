//! App — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets. No side effects in view.

use crate::content::{self, Chapter, Language};

use super::event::TuiMessage;

/// Which tab is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    /// Book Contents (1, default).
    Overview,
    /// Programming Languages (2).
    Languages,
}

/// The main TUI application state (TEA model).
pub struct App {
    /// Which tab is currently visible.
    pub active_tab: ActiveTab,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Name of the single expanded language panel, if any.
    pub expanded_language: Option<String>,
    /// Chapter index carried in view state. Not consulted by any
    /// rendering path.
    pub current_chapter: usize,
    /// Keyboard cursor over the language rows.
    pub selected_language: usize,
    /// Scroll offset for the Book Contents pane.
    pub overview_scroll: u16,
    /// Viewport height of the Book Contents pane (set by renderer).
    pub overview_viewport_height: u16,
    /// Scroll offset for the Languages pane.
    pub languages_scroll: u16,
    /// Viewport height of the Languages pane (set by renderer).
    pub languages_viewport_height: u16,
    /// When true, bring the selected language row into view on next render.
    pub scroll_to_selected: bool,
    /// Book chapters, reading order.
    pub chapters: Vec<Chapter>,
    /// Language catalog, fixed order.
    pub languages: Vec<Language>,
}

impl App {
    /// Create a new App over the content store, with default view state.
    pub fn new() -> Self {
        Self {
            active_tab: ActiveTab::Overview,
            should_quit: false,
            expanded_language: None,
            current_chapter: 0,
            selected_language: 0,
            overview_scroll: 0,
            overview_viewport_height: 20, // sensible default, updated by renderer
            languages_scroll: 0,
            languages_viewport_height: 20,
            scroll_to_selected: false,
            chapters: content::chapters(),
            languages: content::languages(),
        }
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            TuiMessage::Render => {
                // Render handled externally by runner
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Switch the visible tab. Expansion, selection, and chapter state
    /// are untouched.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Toggle a language panel: collapse it if already expanded,
    /// otherwise expand it, implicitly collapsing any other.
    pub fn toggle_language(&mut self, name: &str) {
        if self.expanded_language.as_deref() == Some(name) {
            self.expanded_language = None;
        } else {
            self.expanded_language = Some(name.to_string());
        }
        tracing::debug!(expanded = ?self.expanded_language, "language panel toggled");
    }

    /// Toggle the panel under the selection cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(lang) = self.languages.get(self.selected_language) {
            let name = lang.name;
            self.toggle_language(name);
            self.scroll_to_selected = true;
        }
    }

    /// Move the language selection up.
    pub fn move_up(&mut self) {
        if self.selected_language > 0 {
            self.selected_language -= 1;
            self.scroll_to_selected = true;
        }
    }

    /// Move the language selection down.
    pub fn move_down(&mut self) {
        let max = self.languages.len().saturating_sub(1);
        if self.selected_language < max {
            self.selected_language += 1;
            self.scroll_to_selected = true;
        }
    }

    /// Scroll the Book Contents pane down one line.
    pub fn scroll_overview_down(&mut self) {
        self.overview_scroll = self.overview_scroll.saturating_add(1);
    }

    /// Scroll the Book Contents pane up one line.
    pub fn scroll_overview_up(&mut self) {
        self.overview_scroll = self.overview_scroll.saturating_sub(1);
    }

    /// Page the Book Contents pane down.
    pub fn page_overview_down(&mut self) {
        self.overview_scroll = self
            .overview_scroll
            .saturating_add(self.overview_viewport_height);
    }

    /// Page the Book Contents pane up.
    pub fn page_overview_up(&mut self) {
        self.overview_scroll = self
            .overview_scroll
            .saturating_sub(self.overview_viewport_height);
    }

    /// Page the Languages pane down, releasing the selection follow.
    pub fn page_languages_down(&mut self) {
        self.scroll_to_selected = false;
        self.languages_scroll = self
            .languages_scroll
            .saturating_add(self.languages_viewport_height);
    }

    /// Page the Languages pane up, releasing the selection follow.
    pub fn page_languages_up(&mut self) {
        self.scroll_to_selected = false;
        self.languages_scroll = self
            .languages_scroll
            .saturating_sub(self.languages_viewport_height);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn app_default_state() {
        let app = App::new();
        assert_eq!(app.active_tab, ActiveTab::Overview);
        assert!(!app.should_quit);
        assert_eq!(app.expanded_language, None);
        assert_eq!(app.current_chapter, 0);
        assert_eq!(app.selected_language, 0);
    }

    #[test]
    fn app_quit_on_ctrl_c() {
        let mut app = App::new();
        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn app_quit_on_q() {
        let mut app = App::new();
        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn app_quit_on_message() {
        let mut app = App::new();
        app.update(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_key_toggles_between_tabs() {
        let mut app = App::new();
        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Tab,
            KeyModifiers::NONE,
        )));
        assert_eq!(app.active_tab, ActiveTab::Languages);

        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Tab,
            KeyModifiers::NONE,
        )));
        assert_eq!(app.active_tab, ActiveTab::Overview);
    }

    #[test]
    fn digit_keys_select_tabs_directly() {
        let mut app = App::new();
        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Char('2'),
            KeyModifiers::NONE,
        )));
        assert_eq!(app.active_tab, ActiveTab::Languages);

        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
        )));
        assert_eq!(app.active_tab, ActiveTab::Overview);
    }

    #[test]
    fn toggle_language_round_trip() {
        let mut app = App::new();
        app.toggle_language("Python");
        assert_eq!(app.expanded_language.as_deref(), Some("Python"));

        app.toggle_language("Python");
        assert_eq!(app.expanded_language, None);
    }

    #[test]
    fn single_panel_expanded_at_a_time() {
        let mut app = App::new();
        app.toggle_language("JavaScript");
        app.toggle_language("Java");
        assert_eq!(app.expanded_language.as_deref(), Some("Java"));
    }

    #[test]
    fn tab_switch_preserves_expansion_and_chapter() {
        let mut app = App::new();
        app.toggle_language("Python");
        app.current_chapter = 3;

        app.select_tab(ActiveTab::Overview);
        app.select_tab(ActiveTab::Languages);

        assert_eq!(app.expanded_language.as_deref(), Some("Python"));
        assert_eq!(app.current_chapter, 3);
    }

    #[test]
    fn toggle_selected_uses_cursor() {
        let mut app = App::new();
        app.selected_language = 1;
        app.toggle_selected();
        assert_eq!(app.expanded_language.as_deref(), Some("Python"));

        app.toggle_selected();
        assert_eq!(app.expanded_language, None);
    }

    #[test]
    fn selection_clamped_to_catalog() {
        let mut app = App::new();
        app.move_up();
        assert_eq!(app.selected_language, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_language, app.languages.len() - 1);
    }

    #[test]
    fn selection_move_requests_follow() {
        let mut app = App::new();
        assert!(!app.scroll_to_selected);
        app.move_down();
        assert!(app.scroll_to_selected);
    }

    #[test]
    fn page_scroll_uses_viewport_height() {
        let mut app = App::new();
        app.overview_viewport_height = 15;
        app.page_overview_down();
        assert_eq!(app.overview_scroll, 15);

        app.page_overview_up();
        assert_eq!(app.overview_scroll, 0);
    }

    #[test]
    fn page_languages_releases_follow() {
        let mut app = App::new();
        app.scroll_to_selected = true;
        app.page_languages_down();
        assert!(!app.scroll_to_selected);
    }
}
