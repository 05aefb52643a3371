//! Game systems.
//!
//! This module groups the ECS systems and the world-level functions that
//! advance a tick, plus the raylib-facing input and render functions used by
//! the frame loop.
//!
//! Submodules overview
//! - [`actions`] – apply game actions to the world
//! - [`animation`] – object animation frames and visibility
//! - [`eventqueue`] – modal event scheduler: freeze, advance, update head
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`movement`] – avatar collision reaction, sliding resolution and sweep
//! - [`render`] – draw state and raylib rendering
//! - [`time`] – update game and simulation clocks

pub mod actions;
pub mod animation;
pub mod eventqueue;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;

use bevy_ecs::prelude::*;

use crate::systems::animation::object_animation;
use crate::systems::eventqueue::{
    advance_event_queue, apply_pending_actions, simulation_running, update_head_event,
};
use crate::systems::movement::avatar_movement;

/// The per-tick systems, in their fixed order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickSet;

/// Add the tick systems to `schedule`.
///
/// Order: event queue advance, avatar movement, object animation (both only
/// while the simulation runs), pending actions, head event update.
pub fn add_tick_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            advance_event_queue,
            avatar_movement.run_if(simulation_running),
            object_animation.run_if(simulation_running),
            apply_pending_actions,
            update_head_event,
        )
            .chain()
            .in_set(TickSet),
    );
}

/// A schedule holding only the tick systems.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_tick_systems(&mut schedule);
    schedule
}
