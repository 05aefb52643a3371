//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`]. The camera follows the
//! avatar; the renderer reads it to transform world coordinates.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera with unit zoom and the view origin at `offset` on screen.
    pub fn centered(offset: Vector2, zoom: f32) -> Self {
        Self(Camera2D {
            offset,
            target: Vector2::new(0.0, 0.0),
            rotation: 0.0,
            zoom,
        })
    }
}
