//! Action buffers.
//!
//! Systems never run actions themselves: they push them onto
//! [`PendingActions`], which the scheduler drains into
//! [`apply_game_action`](crate::systems::actions::apply_game_action) once per
//! tick. [`StartActions`] holds what runs when a new game begins.

use bevy_ecs::prelude::Resource;

use crate::actions::GameAction;

#[derive(Resource, Debug, Default)]
pub struct PendingActions {
    actions: Vec<GameAction>,
}

impl PendingActions {
    pub fn push(&mut self, action: GameAction) {
        self.actions.push(action);
    }

    /// Take every buffered action in push order.
    pub fn drain(&mut self) -> Vec<GameAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

/// Actions applied once by [`start_game`](crate::game::start_game).
#[derive(Resource, Debug, Default, Clone)]
pub struct StartActions(pub Vec<GameAction>);
