use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Every intersection query in glint expects `direction` to be normalized,
/// so that the parametric distance `t` is also a world-space distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from an already normalized direction.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.is_normalized(),
            "ray direction must be unit length, got {direction}"
        );
        Self { origin, direction }
    }

    /// Create a ray, normalizing `direction` first.
    #[inline]
    pub fn normalized(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray starting at `origin` and heading towards `target`.
    #[inline]
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self::normalized(origin, target - origin)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
