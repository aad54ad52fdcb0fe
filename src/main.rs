//! showreel - browse TV shows and keep a list of favourites in the terminal
//!
//! Built on the ratatui component architecture: the App routes key events
//! to components, which answer with Actions that the App applies.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::Show;
use crate::services::{load_catalogue, sample_catalogue, FileStorage, KeyValueStorage, MemoryStorage};
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::{error, info, trace, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::load_or_default();

    if let Err(e) = init_logging(&config) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let (shows, catalogue_error) = load_shows(&config);

    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(&config, shows, || open_storage(&config));
    if catalogue_error.is_some() && app.error.is_none() {
        app.error = catalogue_error;
    }

    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    tui.exit()?;

    if let Err(err) = result {
        error!("Fatal: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Write tracing output to the log file in the data directory
///
/// The level defaults to `info` and can be changed with `SHOWREEL_LOG`.
fn init_logging(config: &Config) -> Result<()> {
    let path = config
        .log_path()
        .context("no data directory for the log file")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let filter = EnvFilter::try_from_env("SHOWREEL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}

/// File storage in the data directory, or memory when there is none
fn open_storage(config: &Config) -> Box<dyn KeyValueStorage> {
    match config.storage_path() {
        Some(path) => {
            let storage = FileStorage::new(path);
            info!(path = %storage.path().display(), "Using file storage");
            Box::new(storage)
        }
        None => {
            warn!("No data directory, favourites will not be kept");
            Box::new(MemoryStorage::new())
        }
    }
}

/// The configured catalogue, or the bundled sample when there is none
///
/// A catalogue that fails to load is replaced by the sample and the reason
/// is returned for the status bar.
fn load_shows(config: &Config) -> (Vec<Show>, Option<String>) {
    let Some(path) = config.catalogue_path.as_deref() else {
        return (sample_catalogue(), None);
    };

    match load_catalogue(path) {
        Ok(shows) => {
            info!(path, count = shows.len(), "Catalogue loaded");
            (shows, None)
        }
        Err(e) => {
            warn!(path, "Falling back to the sample catalogue: {}", e);
            (sample_catalogue(), Some(format!("Catalogue not loaded: {}", e)))
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                error!("Draw error: {}", e);
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            trace!(action = %a, "Dispatching");
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
