//! Show catalogue loading and search filtering
//!
//! The catalogue is a JSON or YAML array of shows. When no catalogue file is
//! configured a small built-in sample is used.

use crate::error::CatalogueError;
use crate::model::Show;
use std::fs;
use std::path::Path;

/// Load a catalogue file, picking the parser from the file extension
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Vec<Show>, CatalogueError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let contents = fs::read_to_string(path)?;

    let shows: Vec<Show> = match extension.as_str() {
        "json" => serde_json::from_str(&contents)?,
        "yaml" | "yml" => serde_yaml::from_str(&contents)?,
        other => return Err(CatalogueError::UnsupportedFormat(other.to_string())),
    };

    Ok(shows)
}

/// Shows whose title or one of whose genres contains `query`
///
/// Matching is case-insensitive. Surrounding whitespace is ignored here;
/// the search bar itself passes the raw text through. An empty query
/// matches everything.
pub fn filter_shows<'a>(shows: &'a [Show], query: &str) -> Vec<&'a Show> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return shows.iter().collect();
    }

    shows
        .iter()
        .filter(|show| {
            show.title.to_lowercase().contains(&query)
                || show.genre.iter().any(|g| g.to_lowercase().contains(&query))
        })
        .collect()
}

pub fn find_show(shows: &[Show], id: u64) -> Option<&Show> {
    shows.iter().find(|show| show.id == id)
}

/// Built-in catalogue used when no file is configured
pub fn sample_catalogue() -> Vec<Show> {
    let show = |id: u64, title: &str, summary: &str, genre: &[&str], rating: f64| Show {
        id,
        title: title.to_string(),
        summary: summary.to_string(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        rating,
        url: format!("https://static.tvmaze.com/posters/{}.jpg", id),
    };

    vec![
        show(
            1,
            "Under the Dome",
            "A small town is suddenly and inexplicably sealed off from the rest of the world by an enormous transparent dome.",
            &["Drama", "Science-Fiction", "Thriller"],
            6.5,
        ),
        show(
            2,
            "Person of Interest",
            "A billionaire software genius and a former CIA agent team up to prevent violent crimes before they happen.",
            &["Action", "Crime", "Science-Fiction"],
            8.8,
        ),
        show(
            3,
            "Bitten",
            "A woman struggles to balance a normal life with her secret identity as the world's only female werewolf.",
            &["Drama", "Horror", "Romance"],
            7.4,
        ),
        show(
            4,
            "Arrow",
            "After years stranded on an island, a billionaire playboy returns home to fight crime with a bow.",
            &["Drama", "Action", "Science-Fiction"],
            7.4,
        ),
        show(
            5,
            "True Detective",
            "Police investigations unearth the personal and professional secrets of those involved.",
            &["Drama", "Crime", "Thriller"],
            8.1,
        ),
        show(
            6,
            "The 100",
            "Ninety-seven years after a nuclear war, a spaceship sends one hundred juvenile delinquents back to Earth.",
            &["Action", "Adventure", "Science-Fiction"],
            7.6,
        ),
        show(
            7,
            "Homeland",
            "A CIA officer becomes convinced that a rescued prisoner of war has been turned.",
            &["Drama", "Thriller", "Espionage"],
            8.2,
        ),
        show(
            8,
            "Glee",
            "A high-school teacher takes over the glee club and tries to restore its former glory.",
            &["Drama", "Music", "Romance"],
            6.7,
        ),
    ]
}
