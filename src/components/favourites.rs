//! Favourites screen
//!
//! Lists the favourites store in insertion order. Every card on this screen
//! is a favourite, so its toggle always removes.

use crate::action::Action;
use crate::component::Component;
use crate::components::show_card::{ShowCard, ShowCardProps};
use crate::model::FavouriteItem;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct FavouritesComponent {
    pub list_state: ListState,
}

impl FavouritesComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_item<'a>(&self, items: &'a [FavouriteItem]) -> Option<&'a FavouriteItem> {
        items.get(self.list_state.selected()?)
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = self.list_state.selected().map(|i| (i + 1) % len).unwrap_or(0);
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }

    /// Keep the selection inside the list after it shrank or grew
    pub fn clamp_selection(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }
}

impl Component for FavouritesComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Enter => Some(Action::OpenSelected),
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Delete => {
                Some(Action::ToggleFavourite)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the store contents; see draw_favourites_screen
        Ok(())
    }
}

pub fn draw_favourites_screen(
    frame: &mut Frame,
    area: Rect,
    favourites: &mut FavouritesComponent,
    items: &[FavouriteItem],
) -> Result<()> {
    let title = format!(" Favourites ({}) ", items.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if items.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("No favourites yet."),
            Line::from("Press f on a show to add it here."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return Ok(());
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let line_width = chunks[0].width.saturating_sub(4) as usize;
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let props = ShowCardProps::from_favourite(item);
            ListItem::new(ShowCard::new(&props).list_line(line_width))
        })
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, chunks[0], &mut favourites.list_state);

    if let Some(item) = favourites.selected_item(items) {
        let props = ShowCardProps::from_favourite(item);
        let card_area = Rect {
            height: chunks[1].height.min(6),
            ..chunks[1]
        };
        ShowCard::new(&props).focused(true).draw(frame, card_area)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, render};

    fn item(id: u64, title: &str) -> FavouriteItem {
        FavouriteItem::new(id, title, format!("{}.jpg", id), 5.0)
    }

    #[test]
    fn test_navigation_wraps() {
        let mut favourites = FavouritesComponent::new();
        favourites.select_first(3);
        favourites.previous(3);
        assert_eq!(favourites.list_state.selected(), Some(2));
        favourites.next(3);
        assert_eq!(favourites.list_state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_selection_after_removal() {
        let mut favourites = FavouritesComponent::new();
        favourites.select_last(3);
        favourites.clamp_selection(2);
        assert_eq!(favourites.list_state.selected(), Some(1));
        favourites.clamp_selection(0);
        assert_eq!(favourites.list_state.selected(), None);
    }

    #[test]
    fn test_selected_item() {
        let items = vec![item(1, "A"), item(2, "B")];
        let mut favourites = FavouritesComponent::new();
        favourites.select_last(items.len());
        assert_eq!(favourites.selected_item(&items).map(|i| i.id), Some(2));
    }

    #[test]
    fn test_delete_key_toggles() {
        let mut favourites = FavouritesComponent::new();
        assert_eq!(
            favourites.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::ToggleFavourite)
        );
    }

    #[test]
    fn test_draw_empty_list() {
        let mut favourites = FavouritesComponent::new();
        let text = buffer_text(&render(60, 8, |frame| {
            let area = frame.area();
            draw_favourites_screen(frame, area, &mut favourites, &[]).unwrap();
        }));
        assert!(text.contains("No favourites yet."));
        assert!(text.contains("Favourites (0)"));
    }

    #[test]
    fn test_draw_selected_card_offers_removal() {
        let items = vec![item(1, "Arrow"), item(2, "Glee")];
        let mut favourites = FavouritesComponent::new();
        favourites.select_first(items.len());

        let text = buffer_text(&render(100, 10, |frame| {
            let area = frame.area();
            draw_favourites_screen(frame, area, &mut favourites, &items).unwrap();
        }));
        assert!(text.contains("♥ Glee"));
        assert!(text.contains("Remove from favorites"));
    }
}
