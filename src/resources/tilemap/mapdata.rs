//! Format-independent map description.
//!
//! [`MapData`] is what a map authoring tool export is parsed into. The
//! runtime only consumes the [`TileRecord`](super::tile::TileRecord) and
//! [`GameObject`](super::object::GameObject) collections built from it by
//! [`TileMap::from_data`](super::TileMap::from_data).
//!
//! Tile id `0` marks an empty cell and produces no record.

use serde::{Deserialize, Serialize};

use crate::resources::tilemap::object::AnimationFrame;
use crate::resources::tilemap::tile::TileTrigger;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Width in tiles.
    pub map_width: u32,
    /// Height in tiles.
    pub map_height: u32,
    pub layers: Vec<LayerData>,
    #[serde(default)]
    pub objects: Vec<ObjectData>,
    #[serde(default)]
    pub tile_defaults: Vec<TileDefault>,
    #[serde(default)]
    pub tile_animations: Vec<TileAnimation>,
}

/// Row-major tile ids, `map_width * map_height` long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerData {
    pub tile_ids: Vec<u32>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

/// An object placement. `x`/`y` is the top-left corner in world units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectData {
    pub x: f32,
    pub y: f32,
    pub tile_id: u32,
    pub name: String,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Defaults to the tile width.
    #[serde(default)]
    pub width: Option<f32>,
    /// Defaults to the tile height.
    #[serde(default)]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileDefault {
    pub tile_id: u32,
    pub passable: bool,
    #[serde(default)]
    pub trigger: Option<TileTrigger>,
}

/// Animation applied to every object placed with `tile_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileAnimation {
    pub tile_id: u32,
    pub frames: Vec<AnimationFrame>,
}

fn visible_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{
            "tile_width": 32, "tile_height": 32,
            "map_width": 2, "map_height": 1,
            "layers": [ { "tile_ids": [1, 2] } ]
        }"#;
        let data: MapData = serde_json::from_str(json).expect("valid map json");
        assert_eq!(data.layers.len(), 1);
        assert!(data.layers[0].visible);
        assert!(data.objects.is_empty());
        assert!(data.tile_defaults.is_empty());
    }

    #[test]
    fn objects_and_defaults_parse() {
        let json = r#"{
            "tile_width": 16, "tile_height": 16,
            "map_width": 1, "map_height": 1,
            "layers": [ { "tile_ids": [4], "visible": false } ],
            "objects": [ { "x": 8.0, "y": 8.0, "tile_id": 9, "name": "chest", "visible": false } ],
            "tile_defaults": [
                { "tile_id": 4, "passable": false },
                { "tile_id": 5, "passable": true, "trigger": { "Count": { "key": "steps" } } }
            ]
        }"#;
        let data: MapData = serde_json::from_str(json).expect("valid map json");
        assert!(!data.layers[0].visible);
        assert_eq!(data.objects[0].name, "chest");
        assert!(!data.objects[0].visible);
        assert_eq!(data.objects[0].width, None);
        assert_eq!(
            data.tile_defaults[1].trigger,
            Some(TileTrigger::Count {
                key: "steps".into()
            })
        );
    }
}
