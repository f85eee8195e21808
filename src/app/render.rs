use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::state::{App, ListRow};
use crate::navbar::{APP_TITLE, Navbar, Route};
use crate::widgets::popup;

const DETAIL_POPUP_WIDTH: u16 = 48;
const DETAIL_POPUP_HEIGHT: u16 = 9;
const NOTICE_POPUP_WIDTH: u16 = 48;
const NOTICE_POPUP_HEIGHT: u16 = 6;
const NO_RESULTS_LABEL: &str = "No results found. Add manually?";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Navbar
            Constraint::Min(3),    // Page body
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.render_navbar(frame, layout[0]);

        match self.route {
            Route::Home => self.render_search_page(frame, layout[1]),
            Route::Login | Route::Register => self.render_auth_page(frame, layout[1]),
        }

        self.render_status(frame, layout[2]);

        if self.controller.detail_view().open {
            self.render_detail_popup(frame);
        }
        if self.manual_entry.is_some() {
            self.render_manual_entry_notice(frame);
        }
    }

    fn render_navbar(&self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::Blue).fg(Color::White);

        let mut actions: Vec<Span> = Vec::new();
        if let Some(user) = self.session.user() {
            actions.push(Span::styled(format!("{}  ", user), bar_style));
        }
        for (i, item) in Navbar::items(&self.session).iter().enumerate() {
            actions.push(Span::styled(
                format!("F{} ", i + 2),
                bar_style.add_modifier(Modifier::DIM),
            ));
            actions.push(Span::styled(format!("{} ", item), bar_style));
        }

        let halves = Layout::horizontal([Constraint::Min(1), Constraint::Min(1)]).split(area);

        let title = Paragraph::new(Span::styled(
            format!(" {}", APP_TITLE),
            bar_style.add_modifier(Modifier::BOLD),
        ))
        .style(bar_style);
        let actions = Paragraph::new(Line::from(actions))
            .alignment(Alignment::Right)
            .style(bar_style);

        frame.render_widget(title, halves[0]);
        frame.render_widget(actions, halves[1]);
    }

    fn render_search_page(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input field
            Constraint::Min(1),    // Suggestions
        ])
        .split(area);

        let focused = !self.controller.detail_view().open && self.manual_entry.is_none();
        self.input.set_focus_style(focused);
        frame.render_widget(&self.input.textarea, layout[0]);

        self.render_suggestions(frame, layout[1]);
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::DarkGray));

        let rows = self.rows();
        if rows.is_empty() {
            let hint = if self.controller.suggestions().is_none() {
                format!(
                    "Type at least {} characters to search",
                    self.controller.min_term_len()
                )
            } else {
                String::new()
            };
            let content = Paragraph::new(hint)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(content, area);
            return;
        }

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let (label, base) = match row {
                    ListRow::Suggestion(s) => (s.name.as_str(), Style::default().fg(Color::White)),
                    ListRow::AddManually => (NO_RESULTS_LABEL, Style::default().fg(Color::Yellow)),
                };

                let line = if i == self.selected {
                    Line::from(Span::styled(
                        format!("► {}", label),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(format!("  {}", label), base))
                };
                ListItem::new(line)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_auth_page(&self, frame: &mut Frame, area: Rect) {
        let title = match self.route {
            Route::Register => " Register ",
            _ => " Login ",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan));

        let lines = vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.login_name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to continue, Esc to go back",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut parts = Vec::new();
        if self.controller.is_lookup_in_flight() {
            parts.push("Searching...");
        }
        if self.controller.is_detail_in_flight() {
            parts.push("Loading detail...");
        }
        let text = if parts.is_empty() {
            "Enter select · Ctrl+U clear · Ctrl+C quit".to_string()
        } else {
            parts.join(" · ")
        };

        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_detail_popup(&self, frame: &mut Frame) {
        let view = self.controller.detail_view();
        let area = popup::centered_popup(frame.area(), DETAIL_POPUP_WIDTH, DETAIL_POPUP_HEIGHT);
        popup::clear_area(frame, area);

        let lines: Vec<Line> = if view.loading {
            vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            ))]
        } else if let Some(detail) = view.detail {
            let mut lines = vec![
                Line::from(Span::styled(
                    detail.food_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Serving: {}", detail.serving_summary())),
            ];
            if let Some(url) = &detail.image_url {
                lines.push(Line::from(Span::styled(
                    format!("Image: {}", url),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        } else {
            vec![Line::from(Span::styled(
                "No details available",
                Style::default().fg(Color::Red),
            ))]
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Food Detail ")
            .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_manual_entry_notice(&self, frame: &mut Frame) {
        let term = self.manual_entry.as_deref().unwrap_or_default();
        let area = popup::centered_popup(frame.area(), NOTICE_POPUP_WIDTH, NOTICE_POPUP_HEIGHT);
        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Add Manually ")
            .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black));

        let text = format!("No match for \"{}\". Enter it by hand in your log.", term);
        frame.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
