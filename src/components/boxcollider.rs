use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(0.0, 0.0),
        }
    }

    /// Modify BoxCollider with given offset from the entity position
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space bounds for an entity at `position`.
    /// Negative sizes are normalized so width and height are never negative.
    pub fn bounds(&self, position: Vector2) -> Rectangle {
        let x0 = position.x + self.offset.x;
        let y0 = position.y + self.offset.y;
        let x1 = x0 + self.size.x;
        let y1 = y0 + self.size.y;
        Rectangle::new(
            x0.min(x1),
            y0.min(y1),
            (x1 - x0).abs(),
            (y1 - y0).abs(),
        )
    }

    /// Entity position that puts the collider's centre at `center`.
    pub fn position_for_center(&self, center: Vector2) -> Vector2 {
        Vector2::new(
            center.x - self.offset.x - self.size.x / 2.0,
            center.y - self.offset.y - self.size.y / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_offset() {
        let collider = BoxCollider::new(16.0, 8.0).with_offset(Vector2::new(2.0, 4.0));
        let r = collider.bounds(Vector2::new(10.0, 10.0));
        assert_eq!((r.x, r.y, r.width, r.height), (12.0, 14.0, 16.0, 8.0));
    }

    #[test]
    fn bounds_normalize_negative_size() {
        let collider = BoxCollider::new(-16.0, 8.0);
        let r = collider.bounds(Vector2::new(10.0, 0.0));
        assert_eq!((r.x, r.width), (-6.0, 16.0));
    }

    #[test]
    fn position_for_center_round_trips() {
        let collider = BoxCollider::new(16.0, 16.0).with_offset(Vector2::new(1.0, 1.0));
        let pos = collider.position_for_center(Vector2::new(48.0, 16.0));
        let r = collider.bounds(pos);
        assert_eq!((r.x + r.width / 2.0, r.y + r.height / 2.0), (48.0, 16.0));
    }
}
