//! Modal event scheduler systems.
//!
//! Per tick, in schedule order:
//! 1. [`advance_event_queue`] pops a finished head and, if the new head is
//!    still running, freezes simulation time for the tick.
//! 2. World simulation systems run only under [`simulation_running`].
//! 3. [`apply_pending_actions`] runs the actions systems buffered.
//! 4. [`update_head_event`] updates the head event once, on game time, and
//!    applies whatever action it returns.

use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::resources::eventqueue::EventQueue;
use crate::resources::input::InputState;
use crate::resources::pendingactions::PendingActions;
use crate::resources::worldtime::WorldTime;
use crate::systems::actions::apply_game_action;

pub fn advance_event_queue(mut queue: ResMut<EventQueue>, mut time: ResMut<WorldTime>) {
    if let Some(finished) = queue.pop_finished() {
        debug!("{} finished, {} event(s) left", finished.kind(), queue.len());
    }
    if !queue.simulation_allowed() {
        time.sim_delta = 0.0;
    }
}

/// Run condition for world simulation systems.
pub fn simulation_running(queue: Res<EventQueue>) -> bool {
    queue.simulation_allowed()
}

pub fn apply_pending_actions(world: &mut World) {
    let actions = world.resource_mut::<PendingActions>().drain();
    for action in &actions {
        if let Err(err) = apply_game_action(world, action) {
            error!("failed to apply {:?}: {}", action, err);
        }
    }
}

pub fn update_head_event(world: &mut World) {
    let time = *world.resource::<WorldTime>();
    let input = world.resource::<InputState>().clone();

    let action = {
        let mut queue = world.resource_mut::<EventQueue>();
        match queue.head_mut() {
            Some(head) if !head.is_done() => head.update(&time, &input),
            _ => None,
        }
    };

    if let Some(action) = action {
        if let Err(err) = apply_game_action(world, &action) {
            error!("failed to apply {:?}: {}", action, err);
        }
    }
}
