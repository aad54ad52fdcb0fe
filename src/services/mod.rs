//! External collaborators
//!
//! - Key-value client storage backing the favourites store
//! - Show catalogue loading and filtering

pub mod catalogue;
pub mod storage;

pub use catalogue::{filter_shows, find_show, load_catalogue, sample_catalogue};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
