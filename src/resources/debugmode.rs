//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay: collision
//! boxes, tile triggers and a text panel with clocks and signal counts.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
