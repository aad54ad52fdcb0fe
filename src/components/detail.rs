//! Show detail screen
//!
//! Full record of one show with its favourite toggle. Shows that are only
//! known from the favourites list (not in the catalogue) are displayed with
//! the fields stored there.

use crate::action::Action;
use crate::component::Component;
use crate::components::show_card::{ShowCard, ShowCardProps};
use crate::model::{format_rating, Show};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

#[derive(Default)]
pub struct DetailComponent {
    scroll: usize,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn body_lines(show: &Show) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Rating:  ", label),
                Span::styled(
                    format!("★ {}", format_rating(show.rating)),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::styled("Genres:  ", label),
                Span::styled(show.genre_label(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::styled("Image:   ", label),
                Span::styled(show.url.clone(), Style::default().fg(Color::Blue)),
            ]),
            Line::from(""),
        ];

        if show.summary.is_empty() {
            lines.push(Line::from(Span::styled(
                "No summary available.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            lines.push(Line::from(show.summary.clone()));
        }

        lines
    }
}

impl Component for DetailComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(Action::ToggleFavourite),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the show being viewed; see draw_detail_screen
        Ok(())
    }
}

pub fn draw_detail_screen(
    frame: &mut Frame,
    area: Rect,
    detail: &mut DetailComponent,
    id: u64,
    show: Option<&Show>,
    is_favourite: bool,
) -> Result<()> {
    let Some(show) = show else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No show with id {}", id),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press Esc to go back",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Not found "));
        frame.render_widget(paragraph, area);
        return Ok(());
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(area);

    let content = DetailComponent::body_lines(show);
    let visible_height = chunks[0].height.saturating_sub(2) as usize;
    let text_width = chunks[0].width.saturating_sub(2);

    // Rows after wrapping, so a long summary can be scrolled to its end
    let wrapped_height = Paragraph::new(content.clone())
        .wrap(Wrap { trim: true })
        .line_count(text_width);
    let max_scroll = wrapped_height.saturating_sub(visible_height);
    if detail.scroll > max_scroll {
        detail.scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", show.title))
                .title_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true })
        .scroll((detail.scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    if wrapped_height > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(detail.scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            chunks[0].inner(ratatui::layout::Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }

    let props = ShowCardProps::from_show(show, is_favourite);
    let card_area = Rect {
        height: chunks[1].height.min(6),
        ..chunks[1]
    };
    ShowCard::new(&props).focused(true).draw(frame, card_area)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, render};
    use crate::services::sample_catalogue;

    #[test]
    fn test_back_and_toggle_keys() {
        let mut detail = DetailComponent::new();
        assert_eq!(
            detail.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::Back)
        );
        assert_eq!(
            detail.handle_key_event(key(KeyCode::Char('f'))).unwrap(),
            Some(Action::ToggleFavourite)
        );
    }

    #[test]
    fn test_scroll_updates() {
        let mut detail = DetailComponent::new();
        detail.update(Action::ScrollUp).unwrap();
        assert_eq!(detail.scroll, 0);
        detail.update(Action::ScrollDown).unwrap();
        assert_eq!(detail.scroll, 1);
        detail.reset_scroll();
        assert_eq!(detail.scroll, 0);
    }

    #[test]
    fn test_long_summary_scrolls_to_its_last_row() {
        let summary = (1..=60)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let show = Show {
            id: 9,
            title: "Wordy".to_string(),
            summary,
            genre: vec!["Drama".to_string()],
            rating: 6.0,
            url: "w.jpg".to_string(),
        };
        let mut detail = DetailComponent::new();
        for _ in 0..200 {
            detail.update(Action::ScrollDown).unwrap();
        }

        let text = buffer_text(&render(60, 8, |frame| {
            let area = frame.area();
            draw_detail_screen(frame, area, &mut detail, 9, Some(&show), false).unwrap();
        }));

        // Five logical lines, but the summary wraps over many more rows
        assert!(detail.scroll > 4);
        assert!(text.contains("word60"));
        assert!(!text.contains("Rating:"));
    }

    #[test]
    fn test_draw_show_details() {
        let shows = sample_catalogue();
        let mut detail = DetailComponent::new();
        let text = buffer_text(&render(100, 12, |frame| {
            let area = frame.area();
            draw_detail_screen(frame, area, &mut detail, 5, shows.get(4), false).unwrap();
        }));

        assert!(text.contains("True Detective"));
        assert!(text.contains("Drama, Crime, Thriller"));
        assert!(text.contains("Add to favorites"));
    }

    #[test]
    fn test_draw_missing_show() {
        let mut detail = DetailComponent::new();
        let text = buffer_text(&render(60, 8, |frame| {
            let area = frame.area();
            draw_detail_screen(frame, area, &mut detail, 99, None, false).unwrap();
        }));
        assert!(text.contains("No show with id 99"));
    }
}
