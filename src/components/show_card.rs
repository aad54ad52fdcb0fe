//! Show card component
//!
//! Stateless presentation of one show plus a single favourite toggle. The
//! favourite flag is supplied by the caller; activating the toggle reports an
//! intent through a callback and never touches the store itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::truncate_to_width;
use crate::model::{format_rating, FavouriteItem, Show};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const ADD_LABEL: &str = "Add to favorites";
pub const REMOVE_LABEL: &str = "Remove from favorites";

/// Inputs of a show card
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCardProps {
    pub id: u64,
    pub image_url: String,
    pub title: String,
    pub rating: f64,
    pub is_favorite: bool,
}

impl ShowCardProps {
    pub fn from_show(show: &Show, is_favorite: bool) -> Self {
        Self {
            id: show.id,
            image_url: show.url.clone(),
            title: show.title.clone(),
            rating: show.rating,
            is_favorite,
        }
    }

    /// Props for an entry of the favourites list
    pub fn from_favourite(item: &FavouriteItem) -> Self {
        Self {
            id: item.id,
            image_url: item.image_url.clone(),
            title: item.title.clone(),
            rating: item.rating,
            is_favorite: true,
        }
    }
}

/// Intent emitted by the favourite toggle
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// `add-fav` with the item payload
    AddFav(FavouriteItem),
    /// `remove-fav` with the bare id
    RemoveFav(u64),
}

impl CardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CardEvent::AddFav(_) => "add-fav",
            CardEvent::RemoveFav(_) => "remove-fav",
        }
    }
}

impl From<CardEvent> for Action {
    fn from(event: CardEvent) -> Self {
        match event {
            CardEvent::AddFav(item) => Action::AddFavourite(item),
            CardEvent::RemoveFav(id) => Action::RemoveFavourite(id),
        }
    }
}

pub struct ShowCard<'a> {
    props: &'a ShowCardProps,
    focused: bool,
}

impl<'a> ShowCard<'a> {
    pub fn new(props: &'a ShowCardProps) -> Self {
        Self {
            props,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.props.is_favorite {
            REMOVE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Activate the favourite toggle, emitting exactly one event
    pub fn toggle<F: FnOnce(CardEvent)>(&self, emit: F) {
        let event = if self.props.is_favorite {
            CardEvent::RemoveFav(self.props.id)
        } else {
            CardEvent::AddFav(FavouriteItem::new(
                self.props.id,
                self.props.title.clone(),
                self.props.image_url.clone(),
                self.props.rating,
            ))
        };
        emit(event);
    }

    /// One-line summary used inside lists
    pub fn list_line(&self, width: usize) -> Line<'static> {
        let marker = if self.props.is_favorite { "♥ " } else { "  " };
        let rating = format!(" ★ {}", format_rating(self.props.rating));
        let title_width = width.saturating_sub(marker.width() + rating.width());

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Red)),
            Span::styled(
                truncate_to_width(&self.props.title, title_width),
                Style::default().fg(Color::White),
            ),
            Span::styled(rating, Style::default().fg(Color::Yellow)),
        ])
    }

    /// Full card body: image reference, title, rating, toggle control
    pub fn card_lines(&self) -> Vec<Line<'static>> {
        let button_style = if self.props.is_favorite {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        let button_style = if self.focused {
            button_style.add_modifier(Modifier::REVERSED)
        } else {
            button_style
        };

        vec![
            Line::from(vec![
                Span::styled("▣ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("[{}]", self.props.title),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(
                    self.props.image_url.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(Span::styled(
                self.props.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format_rating(self.props.rating),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(Span::styled(
                format!("[ {} ]", self.toggle_label()),
                button_style,
            )),
        ]
    }
}

impl Component for ShowCard<'_> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('f') | KeyCode::Char(' ') => {
                let mut emitted = None;
                self.toggle(|event| emitted = Some(Action::from(event)));
                emitted
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let paragraph = Paragraph::new(self.card_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
