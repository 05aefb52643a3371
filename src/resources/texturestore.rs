//! Texture store.
//!
//! Lazily loads textures by path and keeps them for the lifetime of the
//! window. Raylib textures must stay on the main thread, so the store is
//! owned by the frame loop rather than inserted into the ECS world.

use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::error::GameError;

pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load `path` unless it is already cached.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<&Texture2D, GameError> {
        if !self.textures.contains_key(path) {
            let texture =
                rl.load_texture(thread, path)
                    .map_err(|_| GameError::ResourceMissing {
                        kind: "texture",
                        path: path.to_string(),
                    })?;
            info!("loaded texture {} ({}x{})", path, texture.width, texture.height);
            self.textures.insert(path.to_string(), texture);
        }
        self.get(path).ok_or_else(|| GameError::ResourceMissing {
            kind: "texture",
            path: path.to_string(),
        })
    }

    pub fn get(&self, path: &str) -> Option<&Texture2D> {
        self.textures.get(path)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
