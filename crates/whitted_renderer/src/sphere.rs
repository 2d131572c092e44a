//! Sphere primitive for ray tracing.

use crate::{Material, Ray};
use whitted_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Tighten the ray's bound to the near surface, if hit.
    ///
    /// A ray starting inside (or on) the sphere treats it as solid and gets
    /// a hit at distance 0.
    pub fn intersect(&self, ray: Ray) -> Ray {
        if (ray.origin - self.center).length() > self.radius {
            // Project the center onto the ray and measure the miss distance
            let c = self.center - ray.origin;
            let t_mid = c.dot(ray.direction);
            let q = c - t_mid * ray.direction;
            let q2 = q.dot(q);
            let r2 = self.radius * self.radius;
            if q2 > r2 {
                return ray;
            }

            let t = t_mid - (r2 - q2).sqrt();
            if Interval::ahead_of(&ray).surrounds(t) {
                ray.with_t(t)
            } else {
                ray
            }
        } else {
            ray.with_t(0.0)
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}
