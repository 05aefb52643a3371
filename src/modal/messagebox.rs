//! Message box event.

use crate::modal::{MIN_DISPLAY_SECS, blink_on};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// A block of text dismissed with confirm once it has been shown for
/// [`MIN_DISPLAY_SECS`].
#[derive(Debug, Clone)]
pub struct MessageBox {
    pub text: String,
    started_at: Option<f32>,
    done: bool,
}

impl MessageBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            started_at: None,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn update(&mut self, time: &WorldTime, input: &InputState) {
        let start = *self.started_at.get_or_insert(time.elapsed);
        if input.confirm.active && time.elapsed - start >= MIN_DISPLAY_SECS {
            self.done = true;
        }
    }

    /// Whether the "continue" marker is drawn this frame. It only blinks
    /// once the box can be dismissed.
    pub fn continue_marker_visible(&self, game_time: f32) -> bool {
        match self.started_at {
            Some(start) => game_time - start >= MIN_DISPLAY_SECS && blink_on(game_time),
            None => false,
        }
    }
}
