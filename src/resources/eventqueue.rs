//! Modal event queue.
//!
//! FIFO of [`ModalEvent`]s. Enqueueing always appends, so an action deferred
//! behind a message only runs once that message is gone. The head is the only
//! active event.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::modal::ModalEvent;

/// Scheduler state derived from the queue head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Queue empty.
    Idle,
    /// Head not done; the world is frozen.
    EventActive,
    /// Head finished and waits to be popped on the next tick.
    EventJustFinished,
}

#[derive(Resource, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<ModalEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: impl Into<ModalEvent>) {
        self.events.push_back(event.into());
    }

    pub fn head(&self) -> Option<&ModalEvent> {
        self.events.front()
    }

    pub fn head_mut(&mut self) -> Option<&mut ModalEvent> {
        self.events.front_mut()
    }

    /// Pop the head if it has finished. Returns the popped event.
    pub fn pop_finished(&mut self) -> Option<ModalEvent> {
        if self.events.front().is_some_and(ModalEvent::is_done) {
            self.events.pop_front()
        } else {
            None
        }
    }

    pub fn state(&self) -> ModalState {
        match self.events.front() {
            None => ModalState::Idle,
            Some(head) if head.is_done() => ModalState::EventJustFinished,
            Some(_) => ModalState::EventActive,
        }
    }

    /// Whether the world simulation may advance this tick.
    pub fn simulation_allowed(&self) -> bool {
        self.state() != ModalState::EventActive
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModalEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GameAction;
    use crate::modal::messagebox::MessageBox;
    use crate::modal::queuedaction::QueuedAction;
    use crate::resources::input::InputState;
    use crate::resources::worldtime::WorldTime;

    #[test]
    fn empty_queue_is_idle() {
        let queue = EventQueue::new();
        assert_eq!(queue.state(), ModalState::Idle);
        assert!(queue.simulation_allowed());
    }

    #[test]
    fn events_keep_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(MessageBox::new("first"));
        queue.push(QueuedAction::new(GameAction::Noop));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.head().map(ModalEvent::kind), Some("message box"));
        assert_eq!(queue.state(), ModalState::EventActive);
        assert!(!queue.simulation_allowed());
    }

    #[test]
    fn only_finished_heads_are_popped() {
        let mut queue = EventQueue::new();
        queue.push(QueuedAction::new(GameAction::Noop));
        queue.push(MessageBox::new("after"));
        assert!(queue.pop_finished().is_none());

        let head = queue.head_mut().unwrap();
        head.update(&WorldTime::default(), &InputState::default());
        assert_eq!(queue.state(), ModalState::EventJustFinished);
        assert!(queue.simulation_allowed());

        assert!(queue.pop_finished().is_some());
        assert_eq!(queue.head().map(ModalEvent::kind), Some("message box"));
        assert!(queue.pop_finished().is_none());
    }
}
