use crate::Vec3;

/// A ray with origin, direction, and a travel bound `t`.
///
/// `t` is the farthest distance along the ray that still counts. Intersection
/// routines take a ray by value and return it with a tighter `t` when they find
/// a nearer hit, so a scan over many primitives is a fold over the ray.
///
/// The direction is not required to be normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t: f32,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3, t: f32) -> Self {
        Self {
            origin,
            direction,
            t,
        }
    }

    /// Create a ray whose bound is the largest representable distance.
    pub fn unbounded(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, f32::MAX)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the current travel bound.
    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    /// Same ray with a different bound.
    #[inline]
    pub fn with_t(self, t: f32) -> Self {
        Self { t, ..self }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The point at the current bound.
    pub fn end(&self) -> Vec3 {
        self.at(self.t)
    }
}
