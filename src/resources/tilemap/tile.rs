//! Tile records and movement triggers.

use raylib::prelude::Rectangle;
use serde::{Deserialize, Serialize};

use crate::resources::worldsignals::WorldSignals;

/// Effect fired when the avatar's centre travels across a tile.
///
/// `elapsed` is the share of the tick's simulation time spent on the tile and
/// `distance` the length travelled inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TileTrigger {
    /// `scalar[key] += rate * elapsed`
    Dwell { key: String, rate: f32 },
    /// `scalar[key] += rate * distance`
    Distance { key: String, rate: f32 },
    /// `integer[key] += 1` per visit.
    Count { key: String },
    /// Raise a flag.
    Flag { key: String },
    All(Vec<TileTrigger>),
}

impl TileTrigger {
    pub fn apply(&self, signals: &mut WorldSignals, elapsed: f32, distance: f32) {
        match self {
            TileTrigger::Dwell { key, rate } => signals.add_scalar(key.as_str(), rate * elapsed),
            TileTrigger::Distance { key, rate } => {
                signals.add_scalar(key.as_str(), rate * distance)
            }
            TileTrigger::Count { key } => signals.add_integer(key.as_str(), 1),
            TileTrigger::Flag { key } => signals.set_flag(key.as_str(), true),
            TileTrigger::All(triggers) => {
                for trigger in triggers {
                    trigger.apply(signals, elapsed, distance);
                }
            }
        }
    }
}

/// Per tile-id behavior. Unknown ids get the default: passable, no trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileProperties {
    pub passable: bool,
    #[serde(default)]
    pub trigger: Option<TileTrigger>,
}

impl Default for TileProperties {
    fn default() -> Self {
        Self {
            passable: true,
            trigger: None,
        }
    }
}

impl TileProperties {
    pub fn blocking() -> Self {
        Self {
            passable: false,
            trigger: None,
        }
    }

    pub fn with_trigger(trigger: TileTrigger) -> Self {
        Self {
            passable: true,
            trigger: Some(trigger),
        }
    }
}

/// A placed tile. Immutable once the map is built.
#[derive(Debug, Clone)]
pub struct TileRecord {
    /// Column.
    pub i: u32,
    /// Row.
    pub j: u32,
    pub layer: usize,
    pub tile_id: u32,
    pub visible: bool,
    pub bounds: Rectangle,
    pub properties: TileProperties,
}

impl TileRecord {
    /// Tile at grid cell (`i`, `j`) with bounds derived from the tile size.
    pub fn at_cell(
        i: u32,
        j: u32,
        tile_width: f32,
        tile_height: f32,
        tile_id: u32,
        properties: TileProperties,
    ) -> Self {
        Self {
            i,
            j,
            layer: 0,
            tile_id,
            visible: true,
            bounds: Rectangle::new(
                i as f32 * tile_width,
                j as f32 * tile_height,
                tile_width,
                tile_height,
            ),
            properties,
        }
    }

    pub fn on_layer(mut self, layer: usize, visible: bool) -> Self {
        self.layer = layer;
        self.visible = visible;
        self
    }
}

/// Receives every tile visit produced by a movement sweep, in travel order.
pub trait TriggerSink {
    fn on_tile_visit(&mut self, tile: &TileRecord, elapsed: f32, distance: f32);
}

impl TriggerSink for WorldSignals {
    fn on_tile_visit(&mut self, tile: &TileRecord, elapsed: f32, distance: f32) {
        if let Some(trigger) = &tile.properties.trigger {
            trigger.apply(self, elapsed, distance);
        }
    }
}
