/// A range of scalars with open and closed membership tests.
///
/// Used for the `(0, t)` acceptance window of ray hits and for clamping
/// color channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Hits a ray may still accept: strictly in front of the origin and
    /// strictly nearer than its current bound.
    pub fn ahead_of(ray: &crate::Ray) -> Self {
        Self::new(0.0, ray.t)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ray, Vec3};

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(f32::NAN));
    }

    #[test]
    fn test_interval_clamp() {
        let channel = Interval::new(0.0, 255.0);

        assert_eq!(channel.clamp(-5.0), 0.0);
        assert_eq!(channel.clamp(128.0), 128.0);
        assert_eq!(channel.clamp(1000.0), 255.0);
    }

    #[test]
    fn test_ahead_of_ray() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 3.0);
        let window = Interval::ahead_of(&ray);

        assert!(window.surrounds(1.0));
        assert!(!window.surrounds(0.0));
        assert!(!window.surrounds(3.0));
        assert!(!window.surrounds(-1.0));
    }
}
