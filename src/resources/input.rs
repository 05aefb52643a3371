//! Per-frame input resource.
//!
//! Captures the subset of keyboard and gamepad state the game cares about
//! and exposes it via the [`InputState`] resource. The arrow keys (or the
//! first gamepad's left stick) move the avatar and browse menus, Enter
//! confirms, V reveals invisible objects and F11 toggles debug mode.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Record the held state for this frame and derive the edges from the
    /// previous one.
    pub fn set_held(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    /// Analog direction from a gamepad, each axis in [-1, 1].
    pub axis: Vector2,
    pub confirm: BoolState,
    pub show_invisible: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            axis: Vector2::new(0.0, 0.0),
            confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            show_invisible: BoolState::bound_to(KeyboardKey::KEY_V),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Combined keyboard and gamepad direction, each component clamped to
    /// [-1, 1]. Positive y points down.
    pub fn direction(&self) -> Vector2 {
        let key_axis = |negative: &BoolState, positive: &BoolState| {
            (positive.active as i32 - negative.active as i32) as f32
        };
        let x = key_axis(&self.direction_left, &self.direction_right) + self.axis.x;
        let y = key_axis(&self.direction_up, &self.direction_down) + self.axis.y;
        Vector2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
    }

    /// Sign of the vertical direction: -1 up, 1 down, 0 neutral.
    pub fn vertical_step(&self) -> i32 {
        let y = self.direction().y;
        if y > 0.0 {
            1
        } else if y < 0.0 {
            -1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.confirm.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.show_invisible.key_binding, KeyboardKey::KEY_V);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_set_held_edges() {
        let mut bs = BoolState::default();
        bs.set_held(true);
        assert!(bs.active && bs.just_pressed);
        bs.set_held(true);
        assert!(bs.active && !bs.just_pressed);
        bs.set_held(false);
        assert!(!bs.active && bs.just_released);
    }

    #[test]
    fn test_direction_is_clamped() {
        let mut input = InputState::default();
        input.direction_right.active = true;
        input.direction_up.active = true;
        input.axis = Vector2::new(0.7, -0.4);
        let d = input.direction();
        assert_eq!(d.x, 1.0);
        assert_eq!(d.y, -1.0);
        assert_eq!(input.vertical_step(), -1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.direction_left.active = true;
        input.direction_right.active = true;
        assert_eq!(input.direction().x, 0.0);
        assert_eq!(input.vertical_step(), 0);
    }
}
