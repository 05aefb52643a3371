//! Placed map objects.

use raylib::prelude::Rectangle;
use serde::{Deserialize, Serialize};

use crate::actions::{ActionGenerator, ObjectAction};

/// Alpha used for invisible objects while "show invisible" is held.
pub const REVEALED_ALPHA: u8 = 128;

/// One frame of an object animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub tile_id: u32,
    pub duration_ms: u32,
}

/// Frame list looped over game time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectAnimation {
    pub frames: Vec<AnimationFrame>,
}

impl ObjectAnimation {
    /// Tile id showing at `game_time` seconds, `None` for an empty or zero-length loop.
    pub fn frame_at(&self, game_time: f32) -> Option<u32> {
        let total: u32 = self.frames.iter().map(|f| f.duration_ms).sum();
        if total == 0 {
            return None;
        }
        let mut t = ((game_time.max(0.0) * 1000.0) as u64 % total as u64) as u32;
        for frame in &self.frames {
            if t < frame.duration_ms {
                return Some(frame.tile_id);
            }
            t -= frame.duration_ms;
        }
        self.frames.last().map(|f| f.tile_id)
    }
}

/// An object placed on a map. Names are unique within a map.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub name: String,
    pub tile_id: u32,
    pub bounds: Rectangle,
    pub visible: bool,
    pub animation: Option<ObjectAnimation>,
    /// Tile currently displayed; follows the animation when present.
    pub frame_tile_id: u32,
    pub alpha: u8,
    /// Fired when the avatar walks into the object.
    pub collision_action: Option<ObjectAction>,
    /// Source of the object's interaction-menu entries.
    pub action_generator: Option<ActionGenerator>,
}

impl GameObject {
    pub fn new(name: impl Into<String>, tile_id: u32, bounds: Rectangle) -> Self {
        Self {
            name: name.into(),
            tile_id,
            bounds,
            visible: true,
            animation: None,
            frame_tile_id: tile_id,
            alpha: 255,
            collision_action: None,
            action_generator: None,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self.alpha = if visible { 255 } else { 0 };
        self
    }

    pub fn with_collision_action(mut self, action: ObjectAction) -> Self {
        self.collision_action = Some(action);
        self
    }

    pub fn with_action_generator(mut self, generator: ActionGenerator) -> Self {
        self.action_generator = Some(generator);
        self
    }

    pub fn with_animation(mut self, animation: ObjectAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Select the animation frame and display alpha for this tick.
    pub fn update(&mut self, game_time: f32, show_invisible: bool) {
        if let Some(tile_id) = self.animation.as_ref().and_then(|a| a.frame_at(game_time)) {
            self.frame_tile_id = tile_id;
        }
        self.alpha = match (self.visible, show_invisible) {
            (true, _) => 255,
            (false, true) => REVEALED_ALPHA,
            (false, false) => 0,
        };
    }
}
