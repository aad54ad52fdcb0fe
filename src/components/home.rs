//! Home component - the feed screen
//!
//! Search bar on top, the featured carousel below it, then every show that
//! matches the current query as a list of show cards. The home component
//! owns the query text and list selection; the search bar and cards stay
//! stateless.

use crate::action::Action;
use crate::component::Component;
use crate::components::carousel::CarouselComponent;
use crate::components::layout::calculate_home_layout;
use crate::components::search_bar::SearchBar;
use crate::components::show_card::{ShowCard, ShowCardProps};
use crate::model::Show;
use crate::services::filter_shows;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::HashSet;

pub struct HomeComponent {
    pub carousel: CarouselComponent,

    /// List selection state
    pub list_state: ListState,

    /// Search query; the search bar mirrors this value
    pub query: String,

    /// Whether key presses go to the search bar
    pub search_mode: bool,
}

impl HomeComponent {
    pub fn new(featured: Vec<Show>) -> Self {
        Self {
            carousel: CarouselComponent::new(featured),
            list_state: ListState::default(),
            query: String::new(),
            search_mode: false,
        }
    }

    /// Shows matching the current query
    pub fn visible_shows<'a>(&self, shows: &'a [Show]) -> Vec<&'a Show> {
        filter_shows(shows, &self.query)
    }

    pub fn selected_show<'a>(&self, shows: &'a [Show]) -> Option<&'a Show> {
        let idx = self.list_state.selected()?;
        self.visible_shows(shows).get(idx).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, shows: &[Show]) {
        let count = self.visible_shows(shows).len();
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, shows: &[Show]) {
        let count = self.visible_shows(shows).len();
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => (i - 1).min(count - 1),
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, shows: &[Show]) {
        if self.visible_shows(shows).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, shows: &[Show]) {
        let count = self.visible_shows(shows).len();
        self.list_state.select(count.checked_sub(1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Take a new query from the search bar
    pub fn set_query(&mut self, query: String, shows: &[Show]) {
        self.query = query;
        self.select_first(shows);
    }

    /// The search bar bound to this screen's query
    pub fn search_bar(&self) -> SearchBar<'_> {
        SearchBar::new(&self.query).active(self.search_mode)
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = self.carousel.handle_key_event(key)? {
            return Ok(Some(action));
        }

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Enter => Some(Action::OpenSelected),
            KeyCode::Char('f') | KeyCode::Char(' ') => Some(Action::ToggleFavourite),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the catalogue; see draw_home_screen
        Ok(())
    }
}

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub shows: &'a [Show],
    pub favourite_ids: &'a HashSet<u64>,
}

pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_home_layout(area);

    home.search_bar().draw(frame, layout.search)?;
    home.carousel.draw(frame, layout.carousel)?;

    let visible = home.visible_shows(ctx.shows);
    let title = if home.query.is_empty() {
        format!(" Shows ({}) ", visible.len())
    } else {
        format!(" Results for \"{}\" ({}) ", home.query, visible.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if visible.is_empty() {
        let paragraph = Paragraph::new("No shows match your search")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, layout.cards);
        return Ok(());
    }

    let line_width = layout.cards.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|show| {
            let props = ShowCardProps::from_show(show, ctx.favourite_ids.contains(&show.id));
            ListItem::new(ShowCard::new(&props).list_line(line_width))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, layout.cards, &mut home.list_state);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, render};
    use crate::services::sample_catalogue;

    fn home() -> (HomeComponent, Vec<Show>) {
        let shows = sample_catalogue();
        let mut home = HomeComponent::new(shows[..3].to_vec());
        home.select_first(&shows);
        (home, shows)
    }

    #[test]
    fn test_starts_on_first_show() {
        let (home, shows) = home();
        assert_eq!(home.selected_show(&shows).map(|s| s.id), Some(1));
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut home, shows) = home();
        home.previous(&shows);
        assert_eq!(home.selected_show(&shows).map(|s| s.id), Some(8));
        home.next(&shows);
        assert_eq!(home.selected_show(&shows).map(|s| s.id), Some(1));
    }

    #[test]
    fn test_query_filters_and_resets_selection() {
        let (mut home, shows) = home();
        home.select_last(&shows);
        home.set_query("drama".to_string(), &shows);

        assert_eq!(home.list_state.selected(), Some(0));
        assert!(home
            .visible_shows(&shows)
            .iter()
            .all(|s| s.genre.iter().any(|g| g == "Drama")));
    }

    #[test]
    fn test_query_without_matches_clears_selection() {
        let (mut home, shows) = home();
        home.set_query("no such show".to_string(), &shows);
        assert!(home.selected_show(&shows).is_none());
        home.next(&shows);
        assert!(home.list_state.selected().is_none());
    }

    #[test]
    fn test_search_bar_mirrors_query() {
        let (mut home, shows) = home();
        home.set_query("arr".to_string(), &shows);
        assert_eq!(home.search_bar().value(), "arr");
    }

    #[test]
    fn test_key_bindings() {
        let (mut home, _) = home();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::NextSlide)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('f'))).unwrap(),
            Some(Action::ToggleFavourite)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('/'))).unwrap(),
            Some(Action::EnterSearchMode)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenSelected)
        );
    }

    #[test]
    fn test_draw_marks_favourites() {
        let (mut home, shows) = home();
        let favourite_ids: HashSet<u64> = [2].into_iter().collect();
        let ctx = HomeRenderContext {
            shows: &shows,
            favourite_ids: &favourite_ids,
        };

        let text = buffer_text(&render(80, 30, |frame| {
            let area = frame.area();
            draw_home_screen(frame, area, &mut home, &ctx).unwrap();
        }));

        assert!(text.contains("Shows (8)"));
        assert!(text.contains("♥ Person of Interest"));
        assert!(text.contains("Featured 1/3"));
    }
}
