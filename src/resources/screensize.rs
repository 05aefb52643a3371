//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The camera keeps the
//! avatar at the centre of this area and modal overlays are laid out in it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
