//! Root application component
//!
//! App owns the catalogue, the favourites store and the current route. It
//! forwards key events to the focused component and applies the resulting
//! Actions. Show card intents (`add-fav` / `remove-fav`) arrive here as
//! Actions and are the only path by which the store is mutated.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_detail_screen, draw_favourites_screen, draw_home_screen,
    DetailComponent, FavouritesComponent, HelpDialog, HomeComponent, HomeRenderContext,
    QuitDialog, ShowCard, ShowCardProps,
};
use crate::config::Config;
use crate::error::StoreError;
use crate::model::{FavouriteItem, FavouritesStore, Modal, ModalStack, Route, Show};
use crate::services::{find_show, KeyValueStorage};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// How long a status message stays in the status bar
const STATUS_TTL: Duration = Duration::from_secs(3);

pub type Store = FavouritesStore<Box<dyn KeyValueStorage>>;

pub struct App {
    pub should_quit: bool,

    /// Screen currently shown
    pub route: Route,
    /// Screens to return to with Back
    history: Vec<Route>,

    shows: Vec<Show>,
    store: Store,

    home: HomeComponent,
    favourites: FavouritesComponent,
    detail: DetailComponent,
    quit_dialog: QuitDialog,
    help_dialog: HelpDialog,
    modals: ModalStack,

    /// Error shown in the status bar until the next key press
    pub error: Option<String>,
    status: Option<(String, Instant)>,
}

impl App {
    /// Build the application and load persisted favourites
    ///
    /// `open_storage` is called again for an empty store when the persisted
    /// favourites fail to load; the failure is reported in the status bar.
    /// The first screen comes from `config.start_route`, falling back to
    /// Home when the path is unknown.
    pub fn new<F>(config: &Config, shows: Vec<Show>, open_storage: F) -> App
    where
        F: Fn() -> Box<dyn KeyValueStorage>,
    {
        let featured = shows.iter().take(config.featured_count).cloned().collect();
        let mut home = HomeComponent::new(featured);
        home.select_first(&shows);

        let mut errors = Vec::new();
        let store = match FavouritesStore::initialize(open_storage()) {
            Ok(store) => store,
            Err(e) => {
                warn!("Could not load favourites: {}", e);
                errors.push(format!("Favourites not loaded: {}", e));
                FavouritesStore::new(open_storage())
            }
        };

        let mut favourites = FavouritesComponent::new();
        favourites.select_first(store.len());

        let route = match config.start_route.as_deref() {
            None => Route::Home,
            Some(path) => Route::parse(path).unwrap_or_else(|| {
                warn!(path, "Unknown start route");
                errors.push(format!("Unknown start route {}", path));
                Route::Home
            }),
        };

        App {
            should_quit: false,
            route,
            history: Vec::new(),
            shows,
            store,
            home,
            favourites,
            detail: DetailComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            modals: ModalStack::new(),
            error: (!errors.is_empty()).then(|| errors.join("; ")),
            status: None,
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn set_status(&mut self, message: String) {
        self.status = Some((message, Instant::now()));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch screens
    ///
    /// Only detail screens are stacked; going to a top-level screen starts
    /// a fresh history.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        debug!(from = self.route.name(), to = route.name(), path = %route, "Navigating");
        match route {
            Route::Show { .. } => self.history.push(self.route),
            Route::Home | Route::Favourites => self.history.clear(),
        }
        self.enter_route(route);
    }

    fn back(&mut self) {
        let previous = self.history.pop().unwrap_or(Route::Home);
        if previous != self.route {
            debug!(from = self.route.name(), to = previous.name(), "Navigating back");
            self.enter_route(previous);
        }
    }

    fn enter_route(&mut self, route: Route) {
        self.route = route;
        self.home.exit_search_mode();
        match route {
            Route::Home => {}
            Route::Favourites => self.favourites.clamp_selection(self.store.len()),
            Route::Show { .. } => self.detail.reset_scroll(),
        }
    }

    /// The show displayed for `id`, falling back to the stored favourite
    fn resolve_show(&self, id: u64) -> Option<Show> {
        find_show(&self.shows, id)
            .cloned()
            .or_else(|| self.store.get(id).map(Show::from))
    }

    /// Id of the show highlighted on the current list screen
    fn selected_id(&self) -> Option<u64> {
        match self.route {
            Route::Home => self.home.selected_show(&self.shows).map(|s| s.id),
            Route::Favourites => self
                .favourites
                .selected_item(self.store.items())
                .map(|item| item.id),
            Route::Show { id } => Some(id),
        }
    }

    /// Props of the card whose toggle has focus
    fn focused_card(&self) -> Option<ShowCardProps> {
        match self.route {
            Route::Home => self
                .home
                .selected_show(&self.shows)
                .map(|show| ShowCardProps::from_show(show, self.store.contains(show.id))),
            Route::Favourites => self
                .favourites
                .selected_item(self.store.items())
                .map(ShowCardProps::from_favourite),
            Route::Show { id } => self
                .resolve_show(id)
                .map(|show| ShowCardProps::from_show(&show, self.store.contains(id))),
        }
    }

    fn favourite_ids(&self) -> HashSet<u64> {
        self.store.items().iter().map(|item| item.id).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Favourites
    // ─────────────────────────────────────────────────────────────────────────

    fn add_favourite(&mut self, item: FavouriteItem) {
        let title = item.title.clone();
        match self.store.add(item) {
            Ok(true) => self.set_status(format!("Added \"{}\" to favourites", title)),
            Ok(false) => {}
            Err(e) => self.report_store_error(e),
        }
    }

    fn remove_favourite(&mut self, id: u64) {
        let title = self.store.get(id).map(|item| item.title.clone());
        match self.store.remove(id) {
            Ok(true) => {
                let title = title.unwrap_or_else(|| id.to_string());
                self.set_status(format!("Removed \"{}\" from favourites", title));
            }
            Ok(false) => {}
            Err(e) => self.report_store_error(e),
        }
        self.favourites.clamp_selection(self.store.len());
    }

    fn report_store_error(&mut self, e: StoreError) {
        error!("Favourites storage failed: {}", e);
        self.error = Some(e.to_string());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut titles = vec![
            Route::Home.title().to_string(),
            format!("{} ({})", Route::Favourites.title(), self.store.len()),
        ];
        let selected = match self.route {
            Route::Home => 0,
            Route::Favourites => 1,
            Route::Show { .. } => {
                titles.push(self.route.title().to_string());
                2
            }
        };

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.route.path()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        if let Some(error) = &self.error {
            spans.push(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            ));
        } else if let Some(status) = self.status_message() {
            spans.push(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.route {
            Route::Home if self.home.search_mode => {
                &[("Enter/Esc", "Done"), ("Ctrl+u", "Clear")]
            }
            Route::Home => &[
                ("j/k", "Move"),
                ("h/l", "Slide"),
                ("/", "Search"),
                ("f", "Favourite"),
                ("Enter", "Details"),
                ("2", "Favourites"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            Route::Favourites if self.store.is_empty() => {
                &[("1", "Home"), ("?", "Help"), ("q", "Quit")]
            }
            Route::Favourites => &[
                ("j/k", "Move"),
                ("f", "Remove"),
                ("Enter", "Details"),
                ("1", "Home"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            Route::Show { .. } => &[
                ("f", "Favourite"),
                ("j/k", "Scroll"),
                ("Esc", "Back"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(
                        format!(" {} ", key),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{} ", label)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!(
            shows = self.shows.len(),
            favourites = self.store.len(),
            "Application started"
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        self.error = None;

        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::Help => self.help_dialog.handle_key_event(key),
            };
        }

        if self.route == Route::Home && self.home.search_mode {
            let mut search_bar = self.home.search_bar();
            return search_bar.handle_key_event(key);
        }

        let global = match key.code {
            KeyCode::Char('1') => Some(Action::Navigate(Route::Home)),
            KeyCode::Char('2') => Some(Action::Navigate(Route::Favourites)),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        if global.is_some() {
            return Ok(global);
        }

        match self.route {
            Route::Home => self.home.handle_key_event(key),
            Route::Favourites => self.favourites.handle_key_event(key),
            Route::Show { .. } => self.detail.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if matches!(&self.status, Some((_, at)) if at.elapsed() >= STATUS_TTL) {
                    self.status = None;
                }
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("Quitting");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Routing
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => self.navigate(route),
            Action::Back => self.back(),
            Action::OpenSelected => {
                if self.route == Route::Home || self.route == Route::Favourites {
                    return Ok(self
                        .selected_id()
                        .map(|id| Action::Navigate(Route::Show { id })));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // List Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => match self.route {
                Route::Home => self.home.next(&self.shows),
                Route::Favourites => self.favourites.next(self.store.len()),
                Route::Show { .. } => {}
            },
            Action::PrevItem => match self.route {
                Route::Home => self.home.previous(&self.shows),
                Route::Favourites => self.favourites.previous(self.store.len()),
                Route::Show { .. } => {}
            },
            Action::FirstItem => match self.route {
                Route::Home => self.home.select_first(&self.shows),
                Route::Favourites => self.favourites.select_first(self.store.len()),
                Route::Show { .. } => {}
            },
            Action::LastItem => match self.route {
                Route::Home => self.home.select_last(&self.shows),
                Route::Favourites => self.favourites.select_last(self.store.len()),
                Route::Show { .. } => {}
            },

            // ─────────────────────────────────────────────────────────────────
            // Carousel
            // ─────────────────────────────────────────────────────────────────
            Action::NextSlide | Action::PrevSlide => return self.home.carousel.update(action),

            // ─────────────────────────────────────────────────────────────────
            // Favourites
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleFavourite => {
                let Some(props) = self.focused_card() else {
                    return Ok(None);
                };
                let mut follow_up = None;
                ShowCard::new(&props).toggle(|event| {
                    debug!(event = event.name(), id = props.id, "Favourite toggled");
                    follow_up = Some(Action::from(event));
                });
                return Ok(follow_up);
            }
            Action::AddFavourite(item) => self.add_favourite(item),
            Action::RemoveFavourite(id) => self.remove_favourite(id),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                self.navigate(Route::Home);
                self.home.enter_search_mode();
            }
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::UpdateQuery(query) => self.home.set_query(query, &self.shows),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                if let Some(Modal::Help) = self.modals.pop() {
                    self.help_dialog.update(Action::CloseModal)?;
                }
            }
            Action::ScrollUp | Action::ScrollDown => {
                if self.modals.top() == Some(Modal::Help) {
                    return self.help_dialog.update(action);
                }
                if let Route::Show { .. } = self.route {
                    return self.detail.update(action);
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.draw_tabs(frame, layout.tabs);

        match self.route {
            Route::Home => {
                let favourite_ids = self.favourite_ids();
                let ctx = HomeRenderContext {
                    shows: &self.shows,
                    favourite_ids: &favourite_ids,
                };
                draw_home_screen(frame, layout.body, &mut self.home, &ctx)?;
            }
            Route::Favourites => {
                draw_favourites_screen(
                    frame,
                    layout.body,
                    &mut self.favourites,
                    self.store.items(),
                )?;
            }
            Route::Show { id } => {
                let show = self.resolve_show(id);
                let is_favourite = self.store.contains(id);
                draw_detail_screen(
                    frame,
                    layout.body,
                    &mut self.detail,
                    id,
                    show.as_ref(),
                    is_favourite,
                )?;
            }
        }

        self.draw_status_bar(frame, layout.status);
        self.draw_help_bar(frame, layout.help);

        let open: Vec<Modal> = self.modals.iter().collect();
        for modal in open {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::{buffer_text, key, render};
    use crate::model::favourite::FAVOURITES_KEY;
    use crate::services::{sample_catalogue, MemoryStorage};

    fn app_with(storage: MemoryStorage) -> App {
        app_with_config(&Config::default(), storage)
    }

    fn app_with_config(config: &Config, storage: MemoryStorage) -> App {
        App::new(config, sample_catalogue(), move || -> Box<dyn KeyValueStorage> {
            Box::new(storage.clone())
        })
    }

    fn app() -> App {
        app_with(MemoryStorage::new())
    }

    /// Apply an action and every follow-up it produces
    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            dispatch(app, action);
        }
    }

    fn persisted_ids(app: &App) -> Vec<u64> {
        let raw = app.store.storage().get(FAVOURITES_KEY).unwrap().unwrap();
        let items: Vec<FavouriteItem> = serde_json::from_str(&raw).unwrap();
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_starts_on_home_with_first_show_selected() {
        let app = app();
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.selected_id(), Some(1));
        assert!(app.store.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_toggle_on_home_emits_add_then_persists() {
        let mut app = app();
        let follow_up = app.update(Action::ToggleFavourite).unwrap();
        assert!(matches!(follow_up, Some(Action::AddFavourite(ref item)) if item.id == 1));

        dispatch(&mut app, follow_up.unwrap());
        assert!(app.store.contains(1));
        assert_eq!(persisted_ids(&app), vec![1]);
        assert_eq!(app.status_message(), Some("Added \"Under the Dome\" to favourites"));
    }

    #[test]
    fn test_toggle_twice_removes_again() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.store.is_empty());
        assert!(persisted_ids(&app).is_empty());
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut app = app();
        let item = FavouriteItem::new(2, "Person of Interest", "poster.jpg", 8.0);
        dispatch(&mut app, Action::AddFavourite(item.clone()));
        dispatch(&mut app, Action::AddFavourite(item));
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_favourites_screen_removes_selected() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(persisted_ids(&app), vec![1, 2]);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::Favourites);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(persisted_ids(&app), vec![1]);
        assert_eq!(app.favourites.list_state.selected(), Some(0));
    }

    #[test]
    fn test_open_details_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Show { id: 2 });

        press(&mut app, KeyCode::Char('f'));
        assert!(app.store.contains(2));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_back_returns_to_favourites() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Show { id: 1 });

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Favourites);
    }

    #[test]
    fn test_switching_tabs_keeps_history_bounded() {
        let mut app = app();
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('2'));
            press(&mut app, KeyCode::Char('1'));
        }
        assert!(app.history.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history, vec![Route::Home]);
        press(&mut app, KeyCode::Char('2'));
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_back_without_history_goes_home() {
        let mut app = app();
        dispatch(&mut app, Action::Navigate(Route::Show { id: 3 }));
        app.history.clear();
        dispatch(&mut app, Action::Back);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_detail_falls_back_to_stored_favourite() {
        let raw = r#"[{"id":500,"title":"Lost Pilot","imageUrl":"p.jpg","rating":9}]"#;
        let mut app = app_with(MemoryStorage::new().with_entry(FAVOURITES_KEY, raw));
        dispatch(&mut app, Action::Navigate(Route::Show { id: 500 }));

        assert_eq!(app.resolve_show(500).map(|s| s.title), Some("Lost Pilot".to_string()));

        press(&mut app, KeyCode::Char('f'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_search_flow_filters_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.home.search_mode);

        for c in "glee".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.home.query, "glee");
        assert_eq!(app.selected_id(), Some(8));

        // Keys typed while searching never reach global bindings
        press(&mut app, KeyCode::Char('q'));
        assert!(app.modals.top().is_none());
        assert_eq!(app.home.query, "gleeq");

        press(&mut app, KeyCode::Esc);
        assert!(!app.home.search_mode);
    }

    #[test]
    fn test_carousel_actions_reach_featured_slides() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.home.carousel.current(), 4);
        assert_eq!(app.home.carousel.offset_percent(), -400);
    }

    #[test]
    fn test_malformed_persisted_favourites_start_empty() {
        let app = app_with(MemoryStorage::new().with_entry(FAVOURITES_KEY, "{oops"));
        assert!(app.store.is_empty());
        assert!(app
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Favourites not loaded")));
    }

    #[test]
    fn test_empty_persisted_favourites_start_clean() {
        let app = app_with(MemoryStorage::new().with_entry(FAVOURITES_KEY, ""));
        assert!(app.store.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_store_recovers_after_malformed_load() {
        let mut app = app_with(MemoryStorage::new().with_entry(FAVOURITES_KEY, "{oops"));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(persisted_ids(&app), vec![1]);
    }

    #[test]
    fn test_start_route_from_config() {
        let config = Config {
            start_route: Some("/shows/4".to_string()),
            ..Config::default()
        };
        let mut app = app_with_config(&config, MemoryStorage::new());
        assert_eq!(app.route, Route::Show { id: 4 });
        assert!(app.error.is_none());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_unknown_start_route_falls_back_home() {
        let config = Config {
            start_route: Some("/movies/4".to_string()),
            ..Config::default()
        };
        let app = app_with_config(&config, MemoryStorage::new());
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.error.as_deref(), Some("Unknown start route /movies/4"));
    }

    #[test]
    fn test_quit_via_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.top().is_none());
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_dialog_opens_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(Modal::Help));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.home.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.top().is_none());
    }

    #[test]
    fn test_draw_every_route() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));

        let home = buffer_text(&render(100, 36, |frame| {
            let area = frame.area();
            app.draw(frame, area).unwrap();
        }));
        assert!(home.contains("Favourites (1)"));
        assert!(home.contains("♥ Under the Dome"));

        dispatch(&mut app, Action::Navigate(Route::Favourites));
        let favourites = buffer_text(&render(100, 36, |frame| {
            let area = frame.area();
            app.draw(frame, area).unwrap();
        }));
        assert!(favourites.contains("/favourites"));
        assert!(favourites.contains("Remove from favorites"));

        dispatch(&mut app, Action::Navigate(Route::Show { id: 42 }));
        let missing = buffer_text(&render(100, 36, |frame| {
            let area = frame.area();
            app.draw(frame, area).unwrap();
        }));
        assert!(missing.contains("No show with id 42"));
        assert!(missing.contains("/shows/42"));
    }
}
