//! Object animation system.
//!
//! Advances every object of the current map to the animation frame for the
//! current game time and sets its display alpha: invisible objects are fully
//! transparent unless "show invisible" is held.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::mapstore::MapStore;
use crate::resources::worldtime::WorldTime;

pub fn object_animation(mut maps: ResMut<MapStore>, time: Res<WorldTime>, input: Res<InputState>) {
    if let Ok(map) = maps.current_mut() {
        map.update_objects(time.elapsed, input.show_invisible.active);
    }
}
