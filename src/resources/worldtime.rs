//! Frame clocks.
//!
//! Two clocks advance together: game time (`elapsed`, `delta`) always runs
//! and drives modal event timers, while simulation time (`sim_delta`) is
//! zeroed for any tick where a modal event holds the world frozen.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Game time since start, in seconds.
    pub elapsed: f32,
    /// Game time spent in the current tick.
    pub delta: f32,
    /// Simulation time for the current tick; 0 while frozen.
    pub sim_delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            sim_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.sim_delta == 0.0 && self.delta > 0.0
    }
}
