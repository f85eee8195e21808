use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, ListRow};
use crate::navbar::{Navbar, Route};

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // Popups block everything else while visible
        if self.manual_entry.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.manual_entry = None;
            }
            return;
        }
        if self.controller.detail_view().open {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.controller.on_detail_close();
            }
            return;
        }

        if self.handle_navbar_key(key) {
            return;
        }

        match self.route {
            Route::Home => self.handle_search_key(key),
            Route::Login | Route::Register => self.handle_auth_page_key(key),
        }
    }

    /// F2/F3 activate the first/second navbar item
    fn handle_navbar_key(&mut self, key: KeyEvent) -> bool {
        let index = match key.code {
            KeyCode::F(2) => 0,
            KeyCode::F(3) => 1,
            _ => return false,
        };

        if let Some(item) = Navbar::items(&self.session).get(index).copied() {
            self.route = Navbar::activate(item, &mut self.session);
            self.login_name.clear();
        }
        true
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_search();
            }
            KeyCode::Esc => {
                if !self.input.text().is_empty() {
                    self.clear_search();
                }
            }
            _ => {
                if self.input.input(key) {
                    let text = self.input.text().to_string();
                    self.controller.on_input(&text);
                    self.selected = 0;
                }
            }
        }
    }

    fn clear_search(&mut self) {
        self.input.clear();
        self.controller.on_clear();
        self.selected = 0;
    }

    fn activate_selected(&mut self) {
        let selected_name = match self.selected_row() {
            Some(ListRow::Suggestion(suggestion)) => Some(suggestion.name.clone()),
            Some(ListRow::AddManually) => None,
            None => return,
        };

        match selected_name {
            Some(name) => self.controller.on_select(&name),
            None => {
                self.controller.add_manually();
                self.take_manual_entry_request();
            }
        }
    }

    fn handle_auth_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.route = Route::Home;
                self.login_name.clear();
            }
            KeyCode::Enter => {
                let name = self.login_name.trim().to_string();
                if !name.is_empty() {
                    self.session.login(name);
                    self.route = Route::Home;
                    self.login_name.clear();
                }
            }
            KeyCode::Backspace => {
                self.login_name.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login_name.push(ch);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
