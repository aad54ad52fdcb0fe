//! Favourites store
//!
//! Holds the user's favourite shows in insertion order and writes them
//! through to key-value storage after every change. The persisted value is a
//! JSON array of `{id, title, imageUrl, rating}` objects under a fixed key.

use crate::error::StoreError;
use crate::services::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Storage key holding the persisted favourites
pub const FAVOURITES_KEY: &str = "favourites";

/// A show the user has marked as a favourite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteItem {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub rating: f64,
    /// Fields this client does not know about, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FavouriteItem {
    pub fn new(id: u64, title: impl Into<String>, image_url: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
            rating,
            extra: Map::new(),
        }
    }
}

/// Ordered favourites collection with write-through persistence
///
/// At most one entry exists per id.
#[derive(Debug)]
pub struct FavouritesStore<S: KeyValueStorage> {
    storage: S,
    items: Vec<FavouriteItem>,
}

impl<S: KeyValueStorage> FavouritesStore<S> {
    /// Create an empty store without reading storage
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            items: Vec::new(),
        }
    }

    /// Create a store and load any persisted favourites
    pub fn initialize(storage: S) -> Result<Self, StoreError> {
        let mut store = Self::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one
    ///
    /// An absent or blank value leaves the collection as it is (empty on a
    /// fresh store). A value that does not parse is reported as
    /// [`StoreError::Malformed`] and the collection is left untouched.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let stored = self.storage.get(FAVOURITES_KEY)?;
        let Some(raw) = stored.filter(|raw| !raw.trim().is_empty()) else {
            debug!("No persisted favourites found");
            return Ok(());
        };

        self.items = serde_json::from_str(&raw).map_err(StoreError::Malformed)?;
        info!(count = self.items.len(), "Loaded favourites");
        Ok(())
    }

    /// Write the current collection to storage
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.items).map_err(StoreError::Encode)?;
        self.storage.set(FAVOURITES_KEY, json)?;
        Ok(())
    }

    /// Append `item` unless its id is already present
    ///
    /// Returns `true` when the item was inserted and persisted. A duplicate
    /// id is a no-op and nothing is written.
    pub fn add(&mut self, item: FavouriteItem) -> Result<bool, StoreError> {
        if self.contains(item.id) {
            debug!(id = item.id, "Favourite already present, skipping add");
            return Ok(false);
        }

        info!(id = item.id, title = %item.title, "Adding favourite");
        self.items.push(item);
        self.save()?;
        Ok(true)
    }

    /// Remove every entry with the given id and persist the result
    ///
    /// Storage is written even when nothing matched. Returns whether any
    /// entry was removed.
    pub fn remove(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;

        info!(id, removed, "Removing favourite");
        self.save()?;
        Ok(removed)
    }

    pub fn items(&self) -> &[FavouriteItem] {
        &self.items
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&FavouriteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
