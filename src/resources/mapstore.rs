//! Registry of named maps and the currently selected one.

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;

use crate::actions::GameAction;
use crate::error::GameError;
use crate::resources::tilemap::TileMap;

#[derive(Resource, Debug, Default)]
pub struct MapStore {
    maps: FxHashMap<String, TileMap>,
    current: Option<String>,
}

impl MapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a map. Names must be unique.
    pub fn add_map(&mut self, name: impl Into<String>, map: TileMap) -> Result<(), GameError> {
        let name = name.into();
        if self.maps.contains_key(&name) {
            return Err(GameError::DuplicateMap(name));
        }
        self.maps.insert(name, map);
        Ok(())
    }

    /// Select `name` as the current map and return its enter actions.
    pub fn enter_map(&mut self, name: &str) -> Result<Vec<GameAction>, GameError> {
        let map = self
            .maps
            .get(name)
            .ok_or_else(|| GameError::UnknownMap(name.to_string()))?;
        let actions = map.enter_actions.clone();
        self.current = Some(name.to_string());
        info!("entered map '{}'", name);
        Ok(actions)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Result<&TileMap, GameError> {
        let name = self.current.as_deref().ok_or(GameError::NoCurrentMap)?;
        self.maps
            .get(name)
            .ok_or_else(|| GameError::UnknownMap(name.to_string()))
    }

    pub fn current_mut(&mut self) -> Result<&mut TileMap, GameError> {
        let name = self.current.as_deref().ok_or(GameError::NoCurrentMap)?;
        self.maps
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownMap(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&TileMap> {
        self.maps.get(name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let mut store = MapStore::new();
        store.add_map("village", TileMap::new(32, 32, 1, 1)).unwrap();
        let err = store
            .add_map("village", TileMap::new(32, 32, 1, 1))
            .unwrap_err();
        assert!(matches!(err, GameError::DuplicateMap(name) if name == "village"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn current_requires_a_selection() {
        let mut store = MapStore::new();
        assert!(matches!(store.current(), Err(GameError::NoCurrentMap)));
        store.add_map("village", TileMap::new(32, 32, 1, 1)).unwrap();
        assert!(store.current().is_err());
        store.enter_map("village").unwrap();
        assert_eq!(store.current_name(), Some("village"));
        assert!(store.current().is_ok());
    }

    #[test]
    fn entering_unknown_map_keeps_selection() {
        let mut store = MapStore::new();
        store.add_map("village", TileMap::new(32, 32, 1, 1)).unwrap();
        store.enter_map("village").unwrap();
        let err = store.enter_map("cave").unwrap_err();
        assert!(matches!(err, GameError::UnknownMap(_)));
        assert_eq!(store.current_name(), Some("village"));
    }

    #[test]
    fn enter_returns_enter_actions() {
        let mut store = MapStore::new();
        let map = TileMap::new(32, 32, 1, 1).on_enter(GameAction::message("Welcome"));
        store.add_map("village", map).unwrap();
        let actions = store.enter_map("village").unwrap();
        assert_eq!(actions, vec![GameAction::message("Welcome")]);
    }
}
