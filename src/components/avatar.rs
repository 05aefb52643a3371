//! Marker for the player-controlled actor.
//!
//! The avatar is the only entity moved by input and the only one that
//! collides with tiles and objects.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Avatar;
