//! Model layer
//!
//! - `Show` - catalogue records, also used as carousel slides
//! - `FavouritesStore` - persisted favourites
//! - `Route` - which screen is shown
//! - `ModalStack` - overlay management

pub mod favourite;
pub mod modal;
pub mod route;
pub mod show;

pub use favourite::{FavouriteItem, FavouritesStore};
pub use modal::{Modal, ModalStack};
pub use route::Route;
pub use show::{format_rating, Show, Slide};
