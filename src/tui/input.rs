//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveTab, App};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            let next = match app.active_tab {
                ActiveTab::Overview => ActiveTab::Languages,
                ActiveTab::Languages => ActiveTab::Overview,
            };
            app.select_tab(next);
            return;
        }
        KeyCode::Char('1') => {
            app.select_tab(ActiveTab::Overview);
            return;
        }
        KeyCode::Char('2') => {
            app.select_tab(ActiveTab::Languages);
            return;
        }
        _ => {}
    }

    // Tab-specific bindings
    match app.active_tab {
        ActiveTab::Overview => handle_overview_key(app, key),
        ActiveTab::Languages => handle_languages_key(app, key),
    }
}

fn handle_overview_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_overview_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_overview_up(),
        KeyCode::PageDown => app.page_overview_down(),
        KeyCode::PageUp => app.page_overview_up(),
        KeyCode::Home => app.overview_scroll = 0,
        // Clamped to content height by the renderer
        KeyCode::End => app.overview_scroll = u16::MAX,
        _ => {}
    }
}

fn handle_languages_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Esc => app.expanded_language = None,
        KeyCode::PageDown => app.page_languages_down(),
        KeyCode::PageUp => app.page_languages_up(),
        _ => {}
    }
}
