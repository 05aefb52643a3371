//! Action runner.
//!
//! [`apply_game_action`] is the only code path through which actions change
//! the world. It takes the whole [`World`] because actions reach across
//! resources (signals, maps, the event queue) and the avatar entity.
//!
//! Modal effects are never shown immediately: they are appended to the
//! [`EventQueue`] and take their turn.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::actions::{GameAction, ObjectAction};
use crate::components::avatar::Avatar;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::error::GameError;
use crate::modal::messagebox::MessageBox;
use crate::modal::queuedaction::QueuedAction;
use crate::modal::selectionmenu::{SelectionMenu, object_interaction_menu};
use crate::resources::eventqueue::EventQueue;
use crate::resources::mapstore::MapStore;
use crate::resources::worldsignals::WorldSignals;

/// Apply `action` to the world.
///
/// `Sequence` stops at the first failing step. Configuration errors (unknown
/// map, unknown object, no avatar) are returned to the caller.
pub fn apply_game_action(world: &mut World, action: &GameAction) -> Result<(), GameError> {
    match action {
        GameAction::Noop => {}
        GameAction::ShowMessage { text } => {
            world
                .resource_mut::<EventQueue>()
                .push(MessageBox::new(text.clone()));
        }
        GameAction::ShowMenu { entries, selection } => {
            world
                .resource_mut::<EventQueue>()
                .push(SelectionMenu::new(entries.clone()).with_selection(*selection));
        }
        GameAction::Queue { action } => {
            world
                .resource_mut::<EventQueue>()
                .push(QueuedAction::new((**action).clone()));
        }
        GameAction::Sequence { actions } => {
            for step in actions {
                apply_game_action(world, step)?;
            }
        }
        GameAction::SetFlag { key, value } => {
            world
                .resource_mut::<WorldSignals>()
                .set_flag(key.as_str(), *value);
        }
        GameAction::SetValue { key, value } => {
            world
                .resource_mut::<WorldSignals>()
                .set_integer(key.as_str(), *value);
        }
        GameAction::AddValue { key, amount } => {
            world
                .resource_mut::<WorldSignals>()
                .add_integer(key.as_str(), *amount);
        }
        GameAction::TeleportTo { x, y } => teleport_to(world, Vector2::new(*x, *y))?,
        GameAction::TeleportToTile { i, j } => teleport_to_tile(world, *i, *j)?,
        GameAction::EnterMap { name } => {
            let enter_actions = world.resource_mut::<MapStore>().enter_map(name)?;
            for step in &enter_actions {
                apply_game_action(world, step)?;
            }
        }
        GameAction::Object { object, action } => apply_object_action(world, object, action)?,
    }
    Ok(())
}

fn apply_object_action(
    world: &mut World,
    subject: &str,
    action: &ObjectAction,
) -> Result<(), GameError> {
    match action {
        ObjectAction::ShowInteractionMenu => {
            let menu = {
                let map = world.resource::<MapStore>().current()?;
                let object = map.object(subject).ok_or_else(|| GameError::UnknownObject {
                    what: "interaction menu",
                    name: subject.to_string(),
                })?;
                let signals = world.resource::<WorldSignals>();
                object
                    .action_generator
                    .as_ref()
                    .map(|generator| object_interaction_menu(subject, generator, signals))
            };
            match menu {
                Some(menu) => world.resource_mut::<EventQueue>().push(menu),
                None => debug!("object '{}' offers no interactions", subject),
            }
        }
        ObjectAction::Converse { conversation } => {
            let menu = conversation.compile(subject, world.resource::<WorldSignals>());
            world.resource_mut::<EventQueue>().push(menu);
        }
        ObjectAction::Run { action } => apply_game_action(world, action)?,
    }
    Ok(())
}

/// Move the avatar's position to `pos`.
pub fn teleport_to(world: &mut World, pos: Vector2) -> Result<(), GameError> {
    let mut query = world.query_filtered::<&mut MapPosition, With<Avatar>>();
    let mut position = query.iter_mut(world).next().ok_or(GameError::NoAvatar)?;
    position.pos = pos;
    Ok(())
}

/// Centre the avatar's collider in tile (`i`, `j`) of the current map.
pub fn teleport_to_tile(world: &mut World, i: u32, j: u32) -> Result<(), GameError> {
    let center = {
        let map = world.resource::<MapStore>().current()?;
        if i >= map.map_width || j >= map.map_height {
            return Err(GameError::MapLayout(format!(
                "tile ({}, {}) is outside the {}x{} map",
                i, j, map.map_width, map.map_height
            )));
        }
        map.tile_center(i, j)
    };
    let mut query = world.query_filtered::<(&mut MapPosition, &BoxCollider), With<Avatar>>();
    let (mut position, collider) = query.iter_mut(world).next().ok_or(GameError::NoAvatar)?;
    position.pos = collider.position_for_center(center);
    Ok(())
}
