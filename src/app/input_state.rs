use ratatui::{
    crossterm::event::KeyEvent,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

const SEARCH_TITLE: &str = " Search food item & Add ";

/// Search field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(SEARCH_TITLE)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("e.g. egg, milk, chicken");

        Self { textarea }
    }

    /// Current search text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed a key to the field; returns true if the text changed
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text().to_string();
        self.textarea.input(key);
        self.text() != before
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    pub fn set_focus_style(&mut self, focused: bool) {
        let color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(SEARCH_TITLE)
                .border_style(Style::default().fg(color)),
        );
    }
}
