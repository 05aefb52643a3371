//! Avatar movement.
//!
//! Each simulation tick the avatar's desired displacement comes from input.
//! In order: the first object hit by the prospective box reacts, the
//! displacement is reduced to what the collision field allows, the avatar
//! moves, and the sweep fires tile triggers along the path actually taken.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::actions::GameAction;
use crate::components::avatar::Avatar;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mapstore::MapStore;
use crate::resources::pendingactions::PendingActions;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub fn avatar_movement(
    mut avatars: Query<(&mut MapPosition, &BoxCollider), With<Avatar>>,
    maps: Res<MapStore>,
    mut signals: ResMut<WorldSignals>,
    mut pending: ResMut<PendingActions>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let Ok(map) = maps.current() else {
        return;
    };

    for (mut position, collider) in avatars.iter_mut() {
        let direction = input.direction();
        let step = config.avatar_speed * time.sim_delta;
        let desired = Vector2::new(direction.x * step, direction.y * step);
        let bounds = collider.bounds(position.pos);

        // Only the first collision reacts; standing still never re-triggers.
        if desired.x != 0.0 || desired.y != 0.0 {
            if let Some(object) = map.get_collisions(&bounds, desired).first() {
                if let Some(action) = &object.collision_action {
                    pending.push(GameAction::on_object(object.name.clone(), action.clone()));
                }
            }
        }

        let allowed = map.adjust_move(&bounds, desired);
        position.pos = Vector2::new(position.pos.x + allowed.x, position.pos.y + allowed.y);
        map.do_move(time.sim_delta, &bounds, allowed, &mut *signals);
    }
}
