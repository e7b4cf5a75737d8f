//! Saved palette store
//!
//! [`PaletteStore`] keeps the saved palettes in memory and mirrors the whole
//! collection, as one JSON array, into a single storage key. Every mutating
//! call ends with an explicit write; there is no background sync.
//!
//! # Failure handling
//!
//! - A stored value that is not valid JSON is discarded on open and the store
//!   starts empty. This is logged, never returned.
//! - A failed write is returned to the caller and the in-memory change is
//!   rolled back, so memory and storage never disagree.
//!
//! # Example
//!
//! ```rust
//! use palette_studio::color::Color;
//! use palette_studio::store::{MemoryStorage, Palette, PaletteStore};
//!
//! let mut store = PaletteStore::open(MemoryStorage::new());
//! let palette = Palette::new("Mono", vec![Color::from_hex("#222222").unwrap()], &[]);
//! let id = palette.id.clone();
//!
//! store.upsert(palette).unwrap();
//! assert!(store.toggle_favorite(&id).unwrap());
//! assert_eq!(store.favorites().count(), 1);
//! ```

pub mod backend;
pub mod palette;

pub use backend::{FileStorage, KeyValueStorage, MemoryStorage};
pub use palette::{generate_id, Palette};

use crate::core::config::DEFAULT_STORAGE_KEY;
use crate::core::error::Result;
use log::{debug, info, warn};

/// In-memory palette collection mirrored to a storage key
pub struct PaletteStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    palettes: Vec<Palette>,
}

impl<S: KeyValueStorage> PaletteStore<S> {
    /// Open the store under the default `saved_palettes` key
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Open the store under a custom key and load what is stored there
    pub fn open_with_key(storage: S, key: &str) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            palettes: Vec::new(),
        };
        store.load();
        store
    }

    /// Replace the in-memory collection with the stored one
    ///
    /// Missing, unreadable, or corrupt data all leave an empty collection.
    pub fn load(&mut self) {
        self.palettes = match self.storage.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Palette>>(&raw) {
                Ok(palettes) => {
                    debug!(
                        "Loaded {} saved palette(s) from '{}'",
                        palettes.len(),
                        self.key
                    );
                    palettes
                }
                Err(e) => {
                    warn!(
                        "Stored palettes under '{}' are corrupt ({}). Starting with an empty collection.",
                        self.key, e
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No saved palettes under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Failed to read saved palettes: {}. Starting with an empty collection.",
                    e
                );
                Vec::new()
            }
        };
    }

    /// Insert a palette, replacing any existing entry with the same id
    pub fn upsert(&mut self, palette: Palette) -> Result<()> {
        let previous = self.palettes.clone();

        match self.palettes.iter_mut().find(|p| p.id == palette.id) {
            Some(existing) => {
                debug!("Replacing palette '{}' ({})", palette.name, palette.id);
                *existing = palette;
            }
            None => {
                info!("Saving new palette '{}' ({})", palette.name, palette.id);
                self.palettes.push(palette);
            }
        }

        self.commit(previous)
    }

    /// Remove every palette with the given id
    ///
    /// Returns whether anything was removed. The collection is written either
    /// way.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let previous = self.palettes.clone();
        self.palettes.retain(|p| p.id != id);
        let removed = self.palettes.len() != previous.len();

        if removed {
            info!("Deleted palette {}", id);
        } else {
            debug!("Delete requested for unknown palette {}", id);
        }

        self.commit(previous)?;
        Ok(removed)
    }

    /// Flip the favorite flag of a palette
    ///
    /// Returns `false` without writing when the id is unknown.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.modify(id, |palette| {
            palette.favorite = !palette.favorite;
            debug!(
                "Palette {} favorite = {}",
                palette.id, palette.favorite
            );
        })
    }

    /// Rename a palette
    ///
    /// Returns `false` without writing when the id is unknown.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool> {
        let name = name.trim().to_string();
        self.modify(id, |palette| palette.name = name)
    }

    /// Add tags to a palette, skipping ones it already has
    ///
    /// Returns `false` without writing when the id is unknown.
    pub fn add_tags(&mut self, id: &str, tags: &[String]) -> Result<bool> {
        self.modify(id, |palette| {
            palette.add_tags(tags);
        })
    }

    /// Saved palettes, in insertion order
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Look up a palette by id
    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Palettes marked as favorite
    pub fn favorites(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter().filter(|p| p.favorite)
    }

    /// Palettes carrying `tag` (case-insensitive)
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Palette> + 'a {
        self.palettes.iter().filter(move |p| p.has_tag(tag))
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Storage key the collection is written under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the backend, e.g. to reopen it as a fresh store
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn modify<F>(&mut self, id: &str, change: F) -> Result<bool>
    where
        F: FnOnce(&mut Palette),
    {
        let Some(index) = self.palettes.iter().position(|p| p.id == id) else {
            debug!("No palette with id {}", id);
            return Ok(false);
        };

        let previous = self.palettes.clone();
        change(&mut self.palettes[index]);
        self.commit(previous)?;
        Ok(true)
    }

    /// Persist the collection, restoring `previous` if the write fails
    fn commit(&mut self, previous: Vec<Palette>) -> Result<()> {
        if let Err(e) = self.save() {
            warn!("Failed to persist palettes, reverting change: {}", e);
            self.palettes = previous;
            return Err(e);
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.palettes)?;
        self.storage.set(&self.key, &json)?;
        debug!("Persisted {} palette(s) to '{}'", self.palettes.len(), self.key);
        Ok(())
    }
}
