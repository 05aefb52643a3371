//! Tile maps: the static collision field the avatar moves through.
//!
//! A [`TileMap`] owns the tile records and placed objects of one map. Tiles
//! are immutable once built; objects only change their animation frame and
//! may have their actions rebound by name.
//!
//! Collision queries live here:
//! - [`TileMap::test_move`] / [`TileMap::adjust_move`] resolve a desired
//!   displacement into an allowed one (axis-priority sliding, X before Y).
//! - [`TileMap::get_collisions`] lists objects overlapping a prospective box.
//! - [`TileMap::do_move`] (see [`sweep`]) fires tile triggers along a path.
//!
//! Submodules overview
//! - [`tile`] – tile records, properties and triggers
//! - [`object`] – placed objects and their animations
//! - [`mapdata`] – serializable map description consumed by [`TileMap::from_data`]
//! - [`sweep`] – ordered traversal of crossed tiles

pub mod mapdata;
pub mod object;
pub mod sweep;
pub mod tile;

use log::debug;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;

use crate::actions::{ActionGenerator, GameAction, ObjectAction};
use crate::error::GameError;
use crate::geometry::RectExt;
use crate::resources::tilemap::mapdata::MapData;
use crate::resources::tilemap::object::{GameObject, ObjectAnimation};
use crate::resources::tilemap::tile::{TileProperties, TileRecord};

/// Per-edge shrink applied to the candidate box before overlap tests.
pub const COLLISION_EPSILON: f32 = 0.05;

#[derive(Debug, Clone)]
pub struct TileMap {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Width in tiles.
    pub map_width: u32,
    /// Height in tiles.
    pub map_height: u32,
    pub tiles: Vec<TileRecord>,
    pub objects: Vec<GameObject>,
    /// Applied every time the map is entered.
    pub enter_actions: Vec<GameAction>,
}

impl TileMap {
    pub fn new(tile_width: u32, tile_height: u32, map_width: u32, map_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            map_width,
            map_height,
            tiles: Vec::new(),
            objects: Vec::new(),
            enter_actions: Vec::new(),
        }
    }

    /// Build tile records and objects from parsed map data.
    ///
    /// Tile ids without an entry in `tile_defaults` are passable with no
    /// trigger. Fails when a layer does not cover the whole grid or when two
    /// objects share a name.
    pub fn from_data(data: &MapData) -> Result<Self, GameError> {
        let mut map = TileMap::new(
            data.tile_width,
            data.tile_height,
            data.map_width,
            data.map_height,
        );
        let (tw, th) = (data.tile_width as f32, data.tile_height as f32);

        let defaults: FxHashMap<u32, TileProperties> = data
            .tile_defaults
            .iter()
            .map(|d| {
                (
                    d.tile_id,
                    TileProperties {
                        passable: d.passable,
                        trigger: d.trigger.clone(),
                    },
                )
            })
            .collect();

        let cells = data
            .map_width
            .checked_mul(data.map_height)
            .ok_or_else(|| {
                GameError::MapLayout(format!(
                    "{}x{} tiles overflow the cell count",
                    data.map_width, data.map_height
                ))
            })? as usize;
        if data.map_width.checked_mul(data.tile_width).is_none()
            || data.map_height.checked_mul(data.tile_height).is_none()
        {
            return Err(GameError::MapLayout(format!(
                "{}x{} tiles of {}x{} pixels overflow the map size",
                data.map_width, data.map_height, data.tile_width, data.tile_height
            )));
        }
        for (layer_index, layer) in data.layers.iter().enumerate() {
            if layer.tile_ids.len() != cells {
                return Err(GameError::MapLayout(format!(
                    "layer {} has {} tiles, expected {}",
                    layer_index,
                    layer.tile_ids.len(),
                    cells
                )));
            }
            for (cell, &tile_id) in layer.tile_ids.iter().enumerate() {
                if tile_id == 0 {
                    continue;
                }
                let i = cell as u32 % data.map_width;
                let j = cell as u32 / data.map_width;
                let properties = defaults.get(&tile_id).cloned().unwrap_or_default();
                map.push_tile(
                    TileRecord::at_cell(i, j, tw, th, tile_id, properties)
                        .on_layer(layer_index, layer.visible),
                );
            }
        }

        let animations: FxHashMap<u32, ObjectAnimation> = data
            .tile_animations
            .iter()
            .map(|a| {
                (
                    a.tile_id,
                    ObjectAnimation {
                        frames: a.frames.clone(),
                    },
                )
            })
            .collect();

        for obj in &data.objects {
            let bounds = Rectangle::new(
                obj.x,
                obj.y,
                obj.width.unwrap_or(tw),
                obj.height.unwrap_or(th),
            );
            let mut object = GameObject::new(obj.name.clone(), obj.tile_id, bounds)
                .with_visible(obj.visible);
            if let Some(animation) = animations.get(&obj.tile_id) {
                object = object.with_animation(animation.clone());
            }
            map.add_object(object)?;
        }

        debug!(
            "built map {}x{} with {} tiles and {} objects",
            map.map_width,
            map.map_height,
            map.tiles.len(),
            map.objects.len()
        );
        Ok(map)
    }

    pub fn push_tile(&mut self, tile: TileRecord) {
        self.tiles.push(tile);
    }

    /// Add an object. Object names must be unique within the map.
    pub fn add_object(&mut self, object: GameObject) -> Result<(), GameError> {
        if self.object(&object.name).is_some() {
            return Err(GameError::MapLayout(format!(
                "duplicate object name '{}'",
                object.name
            )));
        }
        self.objects.push(object);
        Ok(())
    }

    pub fn on_enter(mut self, action: GameAction) -> Self {
        self.enter_actions.push(action);
        self
    }

    pub fn dimensions_in_pixels(&self) -> Vector2 {
        Vector2::new(
            self.map_width as f32 * self.tile_width as f32,
            self.map_height as f32 * self.tile_height as f32,
        )
    }

    /// Centre of tile (`i`, `j`) in world units.
    pub fn tile_center(&self, i: u32, j: u32) -> Vector2 {
        Vector2::new(
            (i as f32 + 0.5) * self.tile_width as f32,
            (j as f32 + 0.5) * self.tile_height as f32,
        )
    }

    pub fn object(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    fn object_mut(&mut self, name: &str, what: &'static str) -> Result<&mut GameObject, GameError> {
        self.objects
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| GameError::UnknownObject {
                what,
                name: name.to_string(),
            })
    }

    /// Rebind the collision action of a named object.
    pub fn set_collision_action(
        &mut self,
        name: &str,
        action: ObjectAction,
    ) -> Result<(), GameError> {
        self.object_mut(name, "collision action")?.collision_action = Some(action);
        Ok(())
    }

    /// Rebind the action generator of a named object.
    pub fn set_action_generator(
        &mut self,
        name: &str,
        generator: ActionGenerator,
    ) -> Result<(), GameError> {
        self.object_mut(name, "action generator")?.action_generator = Some(generator);
        Ok(())
    }

    /// Whether `bounds` translated by `displacement` stays clear of impassable
    /// tiles and of every object.
    pub fn test_move(&self, bounds: &Rectangle, displacement: Vector2) -> bool {
        let candidate = bounds.translated(displacement).deflated(COLLISION_EPSILON);

        if self
            .tiles
            .iter()
            .any(|tile| !tile.properties.passable && tile.bounds.overlaps_rect(&candidate))
        {
            return false;
        }
        !self
            .objects
            .iter()
            .any(|object| object.bounds.overlaps_rect(&candidate))
    }

    /// Largest allowed part of `desired`: the full move, else X only, else Y
    /// only, else nothing.
    pub fn adjust_move(&self, bounds: &Rectangle, desired: Vector2) -> Vector2 {
        if self.test_move(bounds, desired) {
            return desired;
        }
        let x_only = Vector2::new(desired.x, 0.0);
        if self.test_move(bounds, x_only) {
            return x_only;
        }
        let y_only = Vector2::new(0.0, desired.y);
        if self.test_move(bounds, y_only) {
            return y_only;
        }
        Vector2::new(0.0, 0.0)
    }

    /// Objects overlapping `bounds` translated by `displacement`, in map
    /// order. The box is not deflated.
    pub fn get_collisions(&self, bounds: &Rectangle, displacement: Vector2) -> Vec<&GameObject> {
        let candidate = bounds.translated(displacement);
        self.objects
            .iter()
            .filter(|object| object.bounds.overlaps_rect(&candidate))
            .collect()
    }

    /// Advance object animations and visibility alpha.
    pub fn update_objects(&mut self, game_time: f32, show_invisible: bool) {
        for object in &mut self.objects {
            object.update(game_time, show_invisible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tilemap::mapdata::{LayerData, ObjectData, TileDefault};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    /// Three 32x32 tiles in a row, the middle one impassable.
    fn corridor() -> TileMap {
        let mut map = TileMap::new(32, 32, 3, 1);
        map.push_tile(TileRecord::at_cell(0, 0, 32.0, 32.0, 1, TileProperties::default()));
        map.push_tile(TileRecord::at_cell(1, 0, 32.0, 32.0, 2, TileProperties::blocking()));
        map.push_tile(TileRecord::at_cell(2, 0, 32.0, 32.0, 1, TileProperties::default()));
        map
    }

    /// 2x2 grid with only the bottom-right tile impassable.
    fn corner() -> TileMap {
        let mut map = TileMap::new(32, 32, 2, 2);
        for j in 0..2 {
            for i in 0..2 {
                let props = if (i, j) == (1, 1) {
                    TileProperties::blocking()
                } else {
                    TileProperties::default()
                };
                map.push_tile(TileRecord::at_cell(i, j, 32.0, 32.0, 1, props));
            }
        }
        map
    }

    #[test]
    fn blocked_by_impassable_tile() {
        let map = corridor();
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        let allowed = map.adjust_move(&actor, Vector2::new(40.0, 0.0));
        assert!(approx_eq(allowed.x, 0.0));
        assert!(approx_eq(allowed.y, 0.0));
    }

    #[test]
    fn free_move_is_unchanged() {
        let map = corridor();
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        let desired = Vector2::new(4.0, 2.0);
        assert!(map.test_move(&actor, desired));
        let allowed = map.adjust_move(&actor, desired);
        assert!(approx_eq(allowed.x, 4.0));
        assert!(approx_eq(allowed.y, 2.0));
    }

    #[test]
    fn edge_touch_is_not_a_collision() {
        let map = corridor();
        // Right edge lands exactly on the impassable tile's left edge.
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        assert!(map.test_move(&actor, Vector2::new(8.0, 0.0)));
    }

    #[test]
    fn diagonal_into_corner_prefers_x() {
        let map = corner();
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        let allowed = map.adjust_move(&actor, Vector2::new(10.0, 10.0));
        assert!(approx_eq(allowed.x, 10.0));
        assert!(approx_eq(allowed.y, 0.0));
    }

    #[test]
    fn slides_along_y_when_x_blocked() {
        let map = corridor();
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        let allowed = map.adjust_move(&actor, Vector2::new(20.0, 3.0));
        assert!(approx_eq(allowed.x, 0.0));
        assert!(approx_eq(allowed.y, 3.0));
        assert!(map.test_move(&actor, allowed));
    }

    #[test]
    fn objects_block_and_collide_in_map_order() {
        let mut map = corridor();
        map.add_object(GameObject::new("b", 5, Rectangle::new(0.0, 40.0, 16.0, 16.0)))
            .unwrap();
        map.add_object(GameObject::new("a", 5, Rectangle::new(12.0, 40.0, 16.0, 16.0)))
            .unwrap();

        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        assert!(!map.test_move(&actor, Vector2::new(0.0, 20.0)));

        let hits = map.get_collisions(&actor, Vector2::new(0.0, 20.0));
        let names: Vec<&str> = hits.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn collisions_use_undeflated_box() {
        let mut map = TileMap::new(32, 32, 1, 1);
        map.add_object(GameObject::new("wall", 1, Rectangle::new(24.0, 8.0, 8.0, 8.0)))
            .unwrap();
        let actor = Rectangle::new(8.0, 8.0, 16.0, 16.0);
        // Overlap of 0.02 is inside the deflation margin.
        let step = Vector2::new(0.02, 0.0);
        assert!(map.test_move(&actor, step));
        assert_eq!(map.get_collisions(&actor, step).len(), 1);
    }

    #[test]
    fn rebinding_unknown_object_fails() {
        let mut map = corridor();
        let err = map
            .set_collision_action("ghost", ObjectAction::ShowInteractionMenu)
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownObject { .. }));
    }

    #[test]
    fn rebinding_known_object() {
        let mut map = corridor();
        map.add_object(GameObject::new("sign", 5, Rectangle::new(64.0, 0.0, 32.0, 32.0)))
            .unwrap();
        map.set_action_generator("sign", ActionGenerator::new()).unwrap();
        map.set_collision_action("sign", ObjectAction::ShowInteractionMenu)
            .unwrap();
        let sign = map.object("sign").unwrap();
        assert!(sign.action_generator.is_some());
        assert_eq!(sign.collision_action, Some(ObjectAction::ShowInteractionMenu));
    }

    #[test]
    fn from_data_builds_records() {
        let data = MapData {
            tile_width: 16,
            tile_height: 16,
            map_width: 2,
            map_height: 2,
            layers: vec![
                LayerData {
                    tile_ids: vec![1, 2, 1, 0],
                    visible: true,
                },
                LayerData {
                    tile_ids: vec![0, 0, 0, 9],
                    visible: false,
                },
            ],
            objects: vec![ObjectData {
                x: 0.0,
                y: 0.0,
                tile_id: 7,
                name: "statue".into(),
                visible: true,
                width: None,
                height: Some(32.0),
            }],
            tile_defaults: vec![TileDefault {
                tile_id: 2,
                passable: false,
                trigger: None,
            }],
            tile_animations: vec![],
        };

        let map = TileMap::from_data(&data).unwrap();
        assert_eq!(map.tiles.len(), 4);
        let wall = map.tiles.iter().find(|t| t.tile_id == 2).unwrap();
        assert_eq!((wall.i, wall.j), (1, 0));
        assert!(!wall.properties.passable);
        let unknown = map.tiles.iter().find(|t| t.tile_id == 9).unwrap();
        assert!(unknown.properties.passable);
        assert_eq!(unknown.layer, 1);
        assert!(!unknown.visible);
        assert!(approx_eq(unknown.bounds.x, 16.0));
        assert!(approx_eq(unknown.bounds.y, 16.0));

        let statue = map.object("statue").unwrap();
        assert!(approx_eq(statue.bounds.width, 16.0));
        assert!(approx_eq(statue.bounds.height, 32.0));
        let size = map.dimensions_in_pixels();
        assert!(approx_eq(size.x, 32.0));
        assert!(approx_eq(size.y, 32.0));
    }

    #[test]
    fn from_data_rejects_short_layer() {
        let data = MapData {
            tile_width: 16,
            tile_height: 16,
            map_width: 2,
            map_height: 2,
            layers: vec![LayerData {
                tile_ids: vec![1, 1, 1],
                visible: true,
            }],
            objects: vec![],
            tile_defaults: vec![],
            tile_animations: vec![],
        };
        assert!(matches!(
            TileMap::from_data(&data),
            Err(GameError::MapLayout(_))
        ));
    }

    #[test]
    fn from_data_rejects_oversized_dimensions() {
        let empty = |map_width: u32, map_height: u32, tile_size: u32| MapData {
            tile_width: tile_size,
            tile_height: tile_size,
            map_width,
            map_height,
            layers: vec![],
            objects: vec![],
            tile_defaults: vec![],
            tile_animations: vec![],
        };
        assert!(matches!(
            TileMap::from_data(&empty(u32::MAX, 2, 16)),
            Err(GameError::MapLayout(_))
        ));
        assert!(matches!(
            TileMap::from_data(&empty(1 << 30, 1, 16)),
            Err(GameError::MapLayout(_))
        ));
        assert!(TileMap::from_data(&empty(4, 4, 16)).is_ok());
    }

    #[test]
    fn pixel_dimensions_do_not_overflow() {
        let map = TileMap::new(1 << 16, 1 << 16, 1 << 16, 1);
        let size = map.dimensions_in_pixels();
        assert_eq!(size.x, 4294967296.0);
        assert_eq!(size.y, 65536.0);
    }
}
