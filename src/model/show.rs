//! Show records as supplied by the catalogue

use serde::{Deserialize, Serialize};

use super::favourite::FavouriteItem;

/// One show or movie in the catalogue
///
/// Doubles as a carousel slide. `url` is the image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub url: String,
}

/// Slides are plain shows
pub type Slide = Show;

impl Show {
    /// Genres joined for display, or a dash when there are none
    pub fn genre_label(&self) -> String {
        if self.genre.is_empty() {
            "—".to_string()
        } else {
            self.genre.join(", ")
        }
    }
}

impl From<&FavouriteItem> for Show {
    /// A show known only from the favourites list
    fn from(item: &FavouriteItem) -> Self {
        Show {
            id: item.id,
            title: item.title.clone(),
            summary: String::new(),
            genre: Vec::new(),
            rating: item.rating,
            url: item.image_url.clone(),
        }
    }
}

/// Format a rating for display, dropping a trailing `.0`
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}
