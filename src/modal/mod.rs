//! Modal events: UI interactions that freeze the world while they run.
//!
//! Every event exposes the same two capabilities, [`ModalEvent::is_done`]
//! and [`ModalEvent::update`]. Events live in the
//! [`EventQueue`](crate::resources::eventqueue::EventQueue); only its head is
//! ever updated, and the world simulation only advances when the queue is
//! empty or its head has finished.
//!
//! Event timers run on game time, which keeps flowing while simulation time
//! is frozen.
//!
//! Submodules overview
//! - [`queuedaction`] – an action deferred until earlier events finish
//! - [`messagebox`] – text dismissed with confirm
//! - [`selectionmenu`] – a browsable list of labelled actions, plus the
//!   object interaction menu builder
//! - [`conversation`] – dialogue trees compiled into selection menus

pub mod conversation;
pub mod messagebox;
pub mod queuedaction;
pub mod selectionmenu;

use crate::actions::GameAction;
use crate::modal::messagebox::MessageBox;
use crate::modal::queuedaction::QueuedAction;
use crate::modal::selectionmenu::SelectionMenu;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Game time an event stays up before confirm is accepted.
pub const MIN_DISPLAY_SECS: f32 = 0.5;
/// Blink period for highlights and markers; visible during the first half.
pub const BLINK_PERIOD_SECS: f32 = 0.5;

pub(crate) fn blink_on(game_time: f32) -> bool {
    game_time.rem_euclid(BLINK_PERIOD_SECS) < BLINK_PERIOD_SECS / 2.0
}

#[derive(Debug, Clone)]
pub enum ModalEvent {
    QueuedAction(QueuedAction),
    MessageBox(MessageBox),
    SelectionMenu(SelectionMenu),
}

impl ModalEvent {
    pub fn is_done(&self) -> bool {
        match self {
            ModalEvent::QueuedAction(e) => e.is_done(),
            ModalEvent::MessageBox(e) => e.is_done(),
            ModalEvent::SelectionMenu(e) => e.is_done(),
        }
    }

    /// Advance the event by one tick. A returned action must be applied by
    /// the caller right away.
    pub fn update(&mut self, time: &WorldTime, input: &InputState) -> Option<GameAction> {
        match self {
            ModalEvent::QueuedAction(e) => e.update(),
            ModalEvent::MessageBox(e) => {
                e.update(time, input);
                None
            }
            ModalEvent::SelectionMenu(e) => e.update(time, input),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModalEvent::QueuedAction(_) => "queued action",
            ModalEvent::MessageBox(_) => "message box",
            ModalEvent::SelectionMenu(_) => "selection menu",
        }
    }
}

impl From<QueuedAction> for ModalEvent {
    fn from(event: QueuedAction) -> Self {
        ModalEvent::QueuedAction(event)
    }
}

impl From<MessageBox> for ModalEvent {
    fn from(event: MessageBox) -> Self {
        ModalEvent::MessageBox(event)
    }
}

impl From<SelectionMenu> for ModalEvent {
    fn from(event: SelectionMenu) -> Self {
        ModalEvent::SelectionMenu(event)
    }
}
