//! Help dialog component
//!
//! Lists the keyboard shortcuts of every screen.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Anywhere",
        &[
            ("1", "Home"),
            ("2", "Favourites"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
    (
        "Home",
        &[
            ("j / k", "Next / previous show"),
            ("g / G", "First / last show"),
            ("h / l", "Previous / next featured slide"),
            ("/", "Search"),
            ("f", "Add to or remove from favourites"),
            ("Enter", "Show details"),
        ],
    ),
    (
        "Search",
        &[
            ("type", "Edit the query"),
            ("Backspace", "Delete a character"),
            ("Ctrl+u", "Clear the query"),
            ("Enter / Esc", "Leave the search bar"),
        ],
    ),
    (
        "Favourites",
        &[
            ("j / k", "Next / previous favourite"),
            ("f / d", "Remove from favourites"),
            ("Enter", "Show details"),
        ],
    ),
    (
        "Details",
        &[
            ("f", "Add to or remove from favourites"),
            ("j / k", "Scroll"),
            ("Esc", "Back"),
        ],
    ),
];

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    fn content() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (section, bindings) in SECTIONS {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", keys),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*description),
                ]));
            }
        }
        lines
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            Action::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::CloseModal => self.scroll_offset = 0,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 2;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );
        frame.render_widget(Clear, dialog_area);

        let content = Self::content();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = content.len().saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Keyboard Shortcuts ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, render};

    #[test]
    fn test_content_lists_every_section() {
        let text: String = HelpDialog::content()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for (section, _) in SECTIONS {
            assert!(text.contains(*section));
        }
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut dialog = HelpDialog::default();
        for _ in 0..100 {
            dialog.update(Action::ScrollDown).unwrap();
        }
        let text = buffer_text(&render(60, 40, |frame| {
            let area = frame.area();
            dialog.draw(frame, area).unwrap();
        }));
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(dialog.scroll_offset <= HelpDialog::content().len());
    }
}
