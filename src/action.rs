//! Action enum - All possible application actions
//!
//! Components emit Actions in response to key events, and the App processes
//! them to update state.

use crate::model::{FavouriteItem, Route};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to another screen
    Navigate(Route),
    /// Return to the previous screen
    Back,
    /// Open the detail screen for the focused card
    OpenSelected,

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────────────────────
    NextSlide,
    PrevSlide,

    // ─────────────────────────────────────────────────────────────────────────
    // Favourites
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate the favourite toggle of the focused card
    ToggleFavourite,
    /// A card asked for this item to be added (`add-fav`)
    AddFavourite(FavouriteItem),
    /// A card asked for this id to be removed (`remove-fav`)
    RemoveFavourite(u64),

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    /// The search bar emitted a new query value
    UpdateQuery(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
    ScrollUp,
    ScrollDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route),
            Action::Back => write!(f, "Back"),
            Action::OpenSelected => write!(f, "OpenSelected"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextSlide => write!(f, "NextSlide"),
            Action::PrevSlide => write!(f, "PrevSlide"),
            Action::ToggleFavourite => write!(f, "ToggleFavourite"),
            Action::AddFavourite(item) => write!(f, "AddFavourite({})", item.id),
            Action::RemoveFavourite(id) => write!(f, "RemoveFavourite({})", id),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::UpdateQuery(query) => write!(f, "UpdateQuery({:?})", query),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
        }
    }
}
