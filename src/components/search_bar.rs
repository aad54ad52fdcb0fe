//! Search bar component
//!
//! A controlled text input: the displayed text is always the `query` passed
//! in by the owner, and every edit is reported as the complete new value.
//! Values are passed through raw, without trimming or debouncing.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBar<'a> {
    query: &'a str,
    active: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            active: false,
        }
    }

    /// Whether the input currently has focus
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn value(&self) -> &str {
        self.query
    }

    /// Replace the whole input value
    pub fn set_value<F: FnMut(String)>(&self, value: &str, mut emit: F) {
        emit(value.to_string());
    }

    /// Apply an editing key to the current value
    ///
    /// Emits the resulting value when the key changes the text and returns
    /// whether it did.
    pub fn on_key<F: FnMut(String)>(&self, key: KeyEvent, emit: F) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let next = match key.code {
            KeyCode::Char('u') if ctrl => {
                if self.query.is_empty() {
                    None
                } else {
                    Some(String::new())
                }
            }
            KeyCode::Char(c) if !ctrl => {
                let mut next = self.query.to_string();
                next.push(c);
                Some(next)
            }
            KeyCode::Backspace => {
                let mut next = self.query.to_string();
                next.pop().map(|_| next)
            }
            _ => None,
        };

        match next {
            Some(value) => {
                self.set_value(&value, emit);
                true
            }
            None => false,
        }
    }
}

impl Component for SearchBar<'_> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            return Ok(Some(Action::ExitSearchMode));
        }

        let mut emitted = None;
        self.on_key(key, |value| emitted = Some(Action::UpdateQuery(value)));
        Ok(emitted)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border_color = if self.active {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let line = if self.value().is_empty() && !self.active {
            Line::from(Span::styled(
                "Press / to search shows",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.value().to_string(),
                Style::default().fg(Color::White),
            )];
            if self.active {
                spans.push(Span::styled(
                    "▏",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
