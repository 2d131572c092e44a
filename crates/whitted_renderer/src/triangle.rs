//! Triangle primitive for ray tracing.
//!
//! Plane intersection followed by three edge sign tests. Like [`Plane`], the
//! triangle is one-sided: it only accepts rays travelling along its face
//! normal `(b - a) × (c - a)`.
//!
//! [`Plane`]: crate::Plane

use crate::primitive::PARALLEL_EPSILON;
use crate::{Material, Ray};
use whitted_math::{Interval, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self {
            a,
            b,
            c,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn intersect(&self, ray: Ray) -> Ray {
        let facing = self.normal.dot(ray.direction);
        if facing < PARALLEL_EPSILON {
            return ray;
        }

        let t = self.normal.dot(self.a - ray.origin) / facing;
        if t < 0.0 {
            return ray;
        }

        let p = ray.at(t);
        let outside = |from: Vec3, to: Vec3| self.normal.dot((to - from).cross(p - from)) < 0.0;
        if outside(self.a, self.b) || outside(self.b, self.c) || outside(self.c, self.a) {
            return ray;
        }

        if Interval::ahead_of(&ray).surrounds(t) {
            ray.with_t(t)
        } else {
            ray
        }
    }

    /// Shading normal, facing the side rays can arrive from.
    pub fn normal(&self, _point: Vec3) -> Vec3 {
        -self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}
