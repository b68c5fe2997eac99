//! Circle entity and intersection geometry
//!
//! Collision detection runs over `PredictedCircle` snapshots so that a
//! tick's grown radii and the committed radii from before the growth are
//! both available without aliasing the registry.

use glam::Vec2;

/// A spawned circle. Center and color are fixed at creation; radius and
/// speed are rewritten by the collision engine every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    /// RGB in [0, 1]
    pub color: [f32; 3],
    /// Never negative at tick boundaries
    pub radius: f32,
    /// Signed growth per tick; negated on collision, never zero
    pub speed: f32,
}

impl Circle {
    /// Snapshot this circle with one tick of growth applied.
    pub fn predict(&self) -> PredictedCircle {
        PredictedCircle {
            center: self.center,
            radius: self.radius + self.speed,
            prev_radius: self.radius,
        }
    }
}

/// By-value radius snapshot for the prediction phase of a tick.
///
/// `radius` carries the grown value, `prev_radius` the committed value from
/// before the growth (equivalently `radius - speed`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedCircle {
    pub center: Vec2,
    pub radius: f32,
    pub prev_radius: f32,
}

/// Euclidean distance between two circle centers.
#[inline]
pub fn center_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Intersection test for two predicted circles.
///
/// Coincident centers are the degenerate case: the circles collide when
/// their current radii are exactly equal, or when their radius ordering
/// reversed since the last commit (one passed through the other). Otherwise
/// a circle strictly inside the other does not collide, and outer
/// boundaries touching or overlapping do.
pub fn circles_intersect(a: &PredictedCircle, b: &PredictedCircle) -> bool {
    let dist = center_distance(a.center, b.center);

    if dist == 0.0 {
        return a.radius == b.radius
            || (a.prev_radius < b.prev_radius && a.radius > b.radius)
            || (a.prev_radius > b.prev_radius && a.radius < b.radius);
    }

    if dist <= a.radius - b.radius {
        return false; // b is inside a
    }
    if dist <= b.radius - a.radius {
        return false; // a is inside b
    }
    dist <= a.radius + b.radius
}
