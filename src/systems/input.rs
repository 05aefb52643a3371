//! Input sampling.
//!
//! [`poll_input`] reads hardware input from Raylib once per frame and writes
//! the results into [`InputState`]. It is called by the frame loop before the
//! tick schedule so the whole tick sees one consistent snapshot.
use raylib::prelude::*;

use crate::resources::input::InputState;

/// Stick deflection below this is treated as centred.
const GAMEPAD_DEADZONE: f32 = 0.25;

/// Poll the keyboard and the first gamepad into `input`.
pub fn poll_input(rl: &RaylibHandle, input: &mut InputState) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    let up = is_key_down(input.direction_up.key_binding);
    input.direction_up.set_held(up);
    let down = is_key_down(input.direction_down.key_binding);
    input.direction_down.set_held(down);
    let left = is_key_down(input.direction_left.key_binding);
    input.direction_left.set_held(left);
    let right = is_key_down(input.direction_right.key_binding);
    input.direction_right.set_held(right);

    let confirm = is_key_down(input.confirm.key_binding);
    input.confirm.set_held(confirm);
    let show_invisible = is_key_down(input.show_invisible.key_binding);
    input.show_invisible.set_held(show_invisible);
    let debug = is_key_down(input.mode_debug.key_binding);
    input.mode_debug.set_held(debug);

    input.axis = if rl.is_gamepad_available(0) {
        let deadzone = |v: f32| if v.abs() < GAMEPAD_DEADZONE { 0.0 } else { v.clamp(-1.0, 1.0) };
        Vector2::new(
            deadzone(rl.get_gamepad_axis_movement(0, GamepadAxis::GAMEPAD_AXIS_LEFT_X)),
            deadzone(rl.get_gamepad_axis_movement(0, GamepadAxis::GAMEPAD_AXIS_LEFT_Y)),
        )
    } else {
        Vector2::new(0.0, 0.0)
    };
}
