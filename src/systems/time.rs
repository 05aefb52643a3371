//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, before the tick schedule runs.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the game clock and arm the simulation clock for this tick.
///
/// `dt` is the unscaled frame delta in seconds. Both clocks get the scaled
/// delta; the event scheduler zeroes `sim_delta` later if the world is
/// frozen.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.sim_delta = scaled_dt;
    wt.frame_count += 1;
}
