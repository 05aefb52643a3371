use bevy_ecs::prelude::Component;

/// Sprite is identified by a texture key and its size in world units.
/// Entities without a loaded texture are drawn as a plain rectangle.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}
