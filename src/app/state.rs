use std::cell::Cell;
use std::rc::Rc;

use super::input_state::InputState;
use crate::food::Suggestion;
use crate::navbar::Route;
use crate::session::Session;
use crate::suggest::SuggestionController;

/// One selectable row of the suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow<'a> {
    Suggestion(&'a Suggestion),
    /// "No results found. Add manually?"
    AddManually,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub controller: SuggestionController,
    pub session: Session,
    pub route: Route,
    /// Highlighted row in the suggestion list
    pub selected: usize,
    /// Term offered for manual entry, shown as a notice until dismissed
    pub manual_entry: Option<String>,
    /// Name typed on the login/register page
    pub login_name: String,
    manual_entry_requested: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Create a new App around a controller and an explicit session
    pub fn new(controller: SuggestionController, session: Session) -> Self {
        let manual_entry_requested = Rc::new(Cell::new(false));
        let hook_flag = Rc::clone(&manual_entry_requested);
        let controller = controller.with_manual_entry(move || hook_flag.set(true));

        Self {
            input: InputState::new(),
            controller,
            session,
            route: Route::default(),
            selected: 0,
            manual_entry: None,
            login_name: String::new(),
            manual_entry_requested,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance timers and apply worker responses
    ///
    /// Called once per event-loop iteration. Returns true if anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.controller.tick();
        changed |= self.controller.poll_responses();
        changed |= self.take_manual_entry_request();
        self.clamp_selection();
        changed
    }

    /// Move a fired manual-entry notification into visible state
    pub(super) fn take_manual_entry_request(&mut self) -> bool {
        if self.manual_entry_requested.replace(false) {
            self.manual_entry = Some(self.controller.committed_term().to_string());
            true
        } else {
            false
        }
    }

    /// Rows of the suggestion list in display order
    pub fn rows(&self) -> Vec<ListRow<'_>> {
        let mut rows: Vec<ListRow<'_>> = self
            .controller
            .suggestions()
            .unwrap_or_default()
            .iter()
            .map(ListRow::Suggestion)
            .collect();

        if self.controller.no_results() {
            rows.push(ListRow::AddManually);
        }
        rows
    }

    pub fn selected_row(&self) -> Option<ListRow<'_>> {
        self.rows().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.rows().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.rows().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.rows().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
