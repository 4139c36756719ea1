use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is deliberately NOT normalized: shadow rays point at the
/// light with their full length so that `t = 1.0` lands exactly on the
/// light. Any `t` produced against such a ray is measured in units of
/// `|direction|`, not world distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `from` whose parameter reaches `to` at exactly `t = 1`.
    #[inline]
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
