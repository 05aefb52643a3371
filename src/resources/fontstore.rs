//! Font store.
//!
//! Same lifecycle as the texture store: loaded on demand on the main thread
//! and kept by the frame loop.

use log::info;
use raylib::prelude::{Font, RaylibHandle, RaylibThread};
use rustc_hash::FxHashMap;

use crate::error::GameError;

/// Map of font paths to loaded fonts.
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    /// Create an empty font store.
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
        }
    }

    /// Load `path` unless it is already cached.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Font, GameError> {
        if !self.fonts.contains_key(path) {
            let font = rl
                .load_font(thread, path)
                .map_err(|_| GameError::ResourceMissing {
                    kind: "font",
                    path: path.to_string(),
                })?;
            info!("loaded font {}", path);
            self.fonts.insert(path.to_string(), font);
        }
        self.get(path).ok_or_else(|| GameError::ResourceMissing {
            kind: "font",
            path: path.to_string(),
        })
    }

    /// Get a font by its path.
    pub fn get(&self, path: &str) -> Option<&Font> {
        self.fonts.get(path)
    }

    /// Get the number of loaded fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}
