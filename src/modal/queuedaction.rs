//! Deferred action event.

use crate::actions::GameAction;

/// Holds an action until it reaches the head of the event queue; it then
/// runs once and finishes in the same tick.
#[derive(Debug, Clone)]
pub struct QueuedAction {
    action: Option<GameAction>,
}

impl QueuedAction {
    pub fn new(action: GameAction) -> Self {
        Self {
            action: Some(action),
        }
    }

    pub fn is_done(&self) -> bool {
        self.action.is_none()
    }

    pub fn update(&mut self) -> Option<GameAction> {
        self.action.take()
    }
}
