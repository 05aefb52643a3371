//! Plane geometry helpers used by collision and the movement sweep.
//!
//! - [`RectExt`] adds the rectangle queries the engine needs on top of
//!   raylib's [`Rectangle`]: half-open point containment, strict overlap,
//!   translation and edge deflation.
//! - [`LineSegment`] is a parametric segment that can be clipped against a
//!   rectangle. Clipping never fails loudly: degenerate or parallel cases
//!   produce an invalid segment which callers simply skip.

use raylib::prelude::{Rectangle, Vector2};

/// Rectangle queries in world space.
///
/// Containment is half-open (`left <= x < right`), overlap is strict, so two
/// rectangles sharing an edge do not overlap.
pub trait RectExt {
    fn right(&self) -> f32;
    fn bottom(&self) -> f32;
    fn center_point(&self) -> Vector2;
    fn contains_point(&self, point: Vector2) -> bool;
    fn overlaps_rect(&self, other: &Rectangle) -> bool;
    fn translated(&self, by: Vector2) -> Rectangle;
    /// Shrinks every edge inwards by `amount`.
    fn deflated(&self, amount: f32) -> Rectangle;
    /// Grows every edge outwards by `amount`.
    fn padded(&self, amount: f32) -> Rectangle;
}

impl RectExt for Rectangle {
    fn right(&self) -> f32 {
        self.x + self.width
    }

    fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn center_point(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    fn overlaps_rect(&self, other: &Rectangle) -> bool {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        left < right && top < bottom
    }

    fn translated(&self, by: Vector2) -> Rectangle {
        Rectangle::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    fn deflated(&self, amount: f32) -> Rectangle {
        Rectangle::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    fn padded(&self, amount: f32) -> Rectangle {
        self.deflated(-amount)
    }
}

/// Closed-interval test used to validate clip candidates.
fn within_closed(rect: &Rectangle, x: f32, y: f32) -> bool {
    x.is_finite()
        && y.is_finite()
        && rect.x <= x
        && rect.y <= y
        && rect.right() >= x
        && rect.bottom() >= y
}

/// Pulls an exit edge just inside the rectangle so a crossing point is never
/// shared by two neighbouring tiles.
fn inset_edge(edge: f32) -> f32 {
    edge - (edge.abs() * f32::EPSILON).max(f32::EPSILON)
}

/// A directed segment from `p1` to `p2`.
///
/// `valid == false` marks the result of a clip that found no overlap; such a
/// segment carries meaningless endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub p1: Vector2,
    pub p2: Vector2,
    pub valid: bool,
}

impl LineSegment {
    pub fn new(p1: Vector2, p2: Vector2) -> Self {
        Self { p1, p2, valid: true }
    }

    pub fn invalid() -> Self {
        Self {
            p1: Vector2::new(0.0, 0.0),
            p2: Vector2::new(0.0, 0.0),
            valid: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// X coordinate of the supporting line at height `y`.
    ///
    /// Horizontal segments yield a non-finite value.
    pub fn x_at(&self, y: f32) -> f32 {
        ((y - self.p1.y) * (self.p2.x - self.p1.x)) / (self.p2.y - self.p1.y) + self.p1.x
    }

    /// Y coordinate of the supporting line at abscissa `x`.
    ///
    /// Vertical segments yield a non-finite value.
    pub fn y_at(&self, x: f32) -> f32 {
        ((self.p2.y - self.p1.y) * (x - self.p1.x)) / (self.p2.x - self.p1.x) + self.p1.y
    }

    pub fn length(&self) -> f32 {
        if self.p1.x == self.p2.x && self.p1.y == self.p2.y {
            return 0.0;
        }
        (self.p2.x - self.p1.x).hypot(self.p2.y - self.p1.y)
    }

    /// Distance from `point` to this segment's start.
    pub fn distance_to_p1(&self, point: Vector2) -> f32 {
        (point.x - self.p1.x).hypot(point.y - self.p1.y)
    }

    pub fn bounding_rect(&self) -> Rectangle {
        let x1 = self.p1.x.min(self.p2.x);
        let y1 = self.p1.y.min(self.p2.y);
        Rectangle::new(
            x1,
            y1,
            self.p1.x.max(self.p2.x) - x1,
            self.p1.y.max(self.p2.y) - y1,
        )
    }

    /// Clips the segment to `rect`, keeping the direction of travel.
    ///
    /// Returns `self` unchanged when both endpoints are inside. Otherwise the
    /// crossing points are found by intersecting the supporting line with the
    /// edges implied by the travel direction (the horizontal edge candidate is
    /// tried before the vertical one). A candidate is accepted only if it lies
    /// inside both `rect` and the segment's own bounding box; if no candidate
    /// survives the result is invalid.
    pub fn clip_to(&self, rect: &Rectangle) -> LineSegment {
        let contains_p1 = rect.contains_point(self.p1);
        let contains_p2 = rect.contains_point(self.p2);

        if contains_p1 && contains_p2 {
            return *self;
        }

        let bounds = self.bounding_rect();
        let validate = |x: f32, y: f32| within_closed(rect, x, y) && within_closed(&bounds, x, y);

        // Edge the line leaves `rect` through when travelling from `from` towards `to`.
        let edge_x = |from: Vector2, to: Vector2| {
            if to.x > from.x {
                inset_edge(rect.right())
            } else {
                rect.x
            }
        };
        let edge_y = |from: Vector2, to: Vector2| {
            if to.y > from.y {
                inset_edge(rect.bottom())
            } else {
                rect.y
            }
        };

        let crossing = |from: Vector2, to: Vector2| -> Option<Vector2> {
            let possible_x = edge_x(from, to);
            let possible_y = edge_y(from, to);

            let x = self.x_at(possible_y);
            if validate(x, possible_y) {
                return Some(Vector2::new(x, possible_y));
            }
            let y = self.y_at(possible_x);
            if validate(possible_x, y) {
                return Some(Vector2::new(possible_x, y));
            }
            None
        };

        if contains_p1 {
            return match crossing(self.p1, self.p2) {
                Some(exit) => LineSegment::new(self.p1, exit),
                None => LineSegment::invalid(),
            };
        }

        if contains_p2 {
            return match crossing(self.p2, self.p1) {
                Some(entry) => LineSegment::new(entry, self.p2),
                None => LineSegment::invalid(),
            };
        }

        // Neither endpoint is inside: the exit is found looking forward from
        // p1, the entry looking backward from p2.
        let Some(exit) = crossing(self.p1, self.p2) else {
            return LineSegment::invalid();
        };
        let Some(entry) = crossing(self.p2, self.p1) else {
            return LineSegment::invalid();
        };
        // A path running along the exclusive right or bottom edge touches the
        // closed rectangle without ever entering it.
        let mid = Vector2::new((entry.x + exit.x) / 2.0, (entry.y + exit.y) / 2.0);
        if !rect.contains_point(mid) {
            return LineSegment::invalid();
        }
        LineSegment::new(entry, exit)
    }
}
