//! ECS components for entities.
//!
//! Only the avatar lives in the ECS world; map tiles and objects are plain
//! data owned by their [`crate::resources::tilemap::TileMap`].
//!
//! Submodules overview:
//! - [`avatar`] – marker for the player-controlled entity
//! - [`boxcollider`] – axis-aligned rectangular collider relative to the position
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – texture used to draw the entity

pub mod avatar;
pub mod boxcollider;
pub mod mapposition;
pub mod sprite;
