//! Carousel component
//!
//! Shows one slide at a time out of a fixed list. All slides sit side by
//! side on a horizontal track; the track is shifted by one viewport width per
//! cursor step so that the current slide fills the viewport. Navigation wraps
//! in both directions.

use crate::action::Action;
use crate::component::Component;
use crate::model::{format_rating, Slide};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct CarouselComponent {
    slides: Vec<Slide>,
    current: usize,
}

impl CarouselComponent {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, current: 0 }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Cursor position, always a valid index when there are slides
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Advance to the next slide, wrapping from the last to the first
    pub fn next(&mut self) {
        let n = self.slides.len();
        if n == 0 {
            return;
        }
        self.current = (self.current + 1) % n;
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        let n = self.slides.len();
        if n == 0 {
            return;
        }
        self.current = (self.current + n - 1) % n;
    }

    /// Track offset as a percentage of one slide width
    pub fn offset_percent(&self) -> i64 {
        -100 * self.current as i64
    }

    /// Left edge of slide `index` relative to the viewport, in columns
    fn slide_x(&self, index: usize, slide_width: u16) -> i64 {
        let width = slide_width as i64;
        index as i64 * width + self.offset_percent() * width / 100
    }

    /// Slides that intersect the viewport, with the area each occupies
    fn visible_slides(&self, viewport: Rect) -> Vec<(usize, Rect)> {
        let width = viewport.width as i64;
        if width == 0 {
            return Vec::new();
        }

        (0..self.len())
            .filter_map(|index| {
                let x = self.slide_x(index, viewport.width);
                let left = x.max(0);
                let right = (x + width).min(width);
                if right <= left {
                    return None;
                }
                Some((
                    index,
                    Rect::new(
                        viewport.x + left as u16,
                        viewport.y,
                        (right - left) as u16,
                        viewport.height,
                    ),
                ))
            })
            .collect()
    }

    fn slide_lines(slide: &Slide) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::styled(format_rating(slide.rating), Style::default().fg(Color::Yellow)),
                Span::raw("  "),
                Span::styled(slide.genre_label(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(
                slide.url.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        if !slide.summary.is_empty() {
            lines.push(Line::from(slide.summary.clone()));
        }

        lines
    }

    fn position_dots(&self) -> Line<'static> {
        let spans: Vec<Span> = (0..self.len())
            .map(|i| {
                if i == self.current {
                    Span::styled("● ", Style::default().fg(Color::Cyan))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        Line::from(spans)
    }
}

impl Component for CarouselComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevSlide),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextSlide),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextSlide => self.next(),
            Action::PrevSlide => self.previous(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let title = match self.current_slide() {
            Some(_) => format!(" Featured {}/{} ", self.current() + 1, self.len()),
            None => " Featured ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing to feature").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return Ok(());
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(rows[0]);

        let button_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let vertical_pad = columns[0].height.saturating_sub(1) / 2;
        let arrow = |symbol: &'static str| {
            let mut lines = vec![Line::from(""); vertical_pad as usize];
            lines.push(Line::from(Span::styled(symbol, button_style)));
            Paragraph::new(lines).alignment(Alignment::Center)
        };
        frame.render_widget(arrow("‹"), columns[0]);
        frame.render_widget(arrow("›"), columns[2]);

        let slides = self.slides();
        for (index, slide_area) in self.visible_slides(columns[1]) {
            let paragraph =
                Paragraph::new(Self::slide_lines(&slides[index])).wrap(Wrap { trim: true });
            frame.render_widget(paragraph, slide_area);
        }

        frame.render_widget(
            Paragraph::new(self.position_dots()).alignment(Alignment::Center),
            rows[1],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, render};

    fn slide(id: u64, title: &str) -> Slide {
        Slide {
            id,
            title: title.to_string(),
            summary: String::new(),
            genre: vec![],
            rating: id as f64,
            url: format!("{}.jpg", title.to_lowercase()),
        }
    }

    fn four_slides() -> CarouselComponent {
        CarouselComponent::new(vec![
            slide(1, "One"),
            slide(2, "Two"),
            slide(3, "Three"),
            slide(4, "Four"),
        ])
    }

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = four_slides();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.offset_percent(), 0);
        assert_eq!(carousel.current_slide().map(|s| s.id), Some(1));
    }

    #[test]
    fn test_next_moves_track_one_slide() {
        let mut carousel = four_slides();
        carousel.next();
        assert_eq!(carousel.current(), 1);
        assert_eq!(carousel.offset_percent(), -100);
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut carousel = four_slides();
        carousel.previous();
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.offset_percent(), -300);
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let mut carousel = four_slides();
        carousel.previous();
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_next_n_times_returns_to_start() {
        for n in 1..=6 {
            let slides = (0..n).map(|i| slide(i, "S")).collect();
            let mut carousel = CarouselComponent::new(slides);
            for _ in 0..n {
                carousel.next();
            }
            assert_eq!(carousel.current(), 0, "n = {}", n);
        }
    }

    #[test]
    fn test_single_slide_navigation_is_noop() {
        let mut carousel = CarouselComponent::new(vec![slide(1, "Only")]);
        carousel.next();
        assert_eq!(carousel.offset_percent(), 0);
        carousel.previous();
        assert_eq!(carousel.offset_percent(), 0);
    }

    #[test]
    fn test_empty_carousel_navigation_is_noop() {
        let mut carousel = CarouselComponent::new(vec![]);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.current_slide().is_none());
    }

    #[test]
    fn test_keys_map_to_slide_actions() {
        let mut carousel = four_slides();
        assert_eq!(
            carousel.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::NextSlide)
        );
        assert_eq!(
            carousel.handle_key_event(key(KeyCode::Char('h'))).unwrap(),
            Some(Action::PrevSlide)
        );
    }

    #[test]
    fn test_update_applies_slide_actions() {
        let mut carousel = four_slides();
        carousel.update(Action::PrevSlide).unwrap();
        assert_eq!(carousel.current(), 3);
        carousel.update(Action::NextSlide).unwrap();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_only_current_slide_is_visible() {
        let mut carousel = four_slides();
        carousel.next();

        let viewport = Rect::new(3, 1, 40, 8);
        let visible = carousel.visible_slides(viewport);
        assert_eq!(visible, vec![(1, viewport)]);
    }

    #[test]
    fn test_track_places_slides_left_to_right() {
        let carousel = four_slides();
        assert_eq!(carousel.slide_x(0, 40), 0);
        assert_eq!(carousel.slide_x(1, 40), 40);
        assert_eq!(carousel.slide_x(3, 40), 120);
    }

    #[test]
    fn test_draw_shows_current_slide_only() {
        let mut carousel = four_slides();
        carousel.previous();

        let text = buffer_text(&render(60, 10, |frame| {
            let area = frame.area();
            carousel.draw(frame, area).unwrap();
        }));
        assert!(text.contains("Four"));
        assert!(text.contains("4/4"));
        assert!(!text.contains("Two"));
    }

    #[test]
    fn test_draw_empty_carousel() {
        let mut carousel = CarouselComponent::new(vec![]);
        let text = buffer_text(&render(40, 6, |frame| {
            let area = frame.area();
            carousel.draw(frame, area).unwrap();
        }));
        assert!(text.contains("Nothing to feature"));
    }
}
