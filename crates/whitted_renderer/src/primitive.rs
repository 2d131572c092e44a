//! Closed set of intersectable shapes.

use crate::{Material, Plane, Ray, Sphere, Triangle};
use whitted_math::Vec3;

/// Minimum `normal · direction` for a plane or triangle to accept a ray.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Any shape the scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

macro_rules! impl_from_shapes {
    ($($shape:ident),*) => {
        $(impl From<$shape> for Primitive {
            fn from(shape: $shape) -> Self {
                Primitive::$shape(shape)
            }
        })*
    };
}

impl_from_shapes!(Sphere, Plane, Triangle);

impl Primitive {
    /// Return `ray` with `t` tightened to this primitive's hit, if it has one
    /// in `(0, ray.t)`. Otherwise `ray` comes back unchanged.
    pub fn intersect(&self, ray: Ray) -> Ray {
        match self {
            Primitive::Sphere(s) => s.intersect(ray),
            Primitive::Plane(p) => p.intersect(ray),
            Primitive::Triangle(t) => t.intersect(ray),
        }
    }

    /// Unit shading normal at a point on the surface.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(s) => s.normal(point),
            Primitive::Plane(p) => p.normal(point),
            Primitive::Triangle(t) => t.normal(point),
        }
    }

    /// Material at a point on the surface.
    pub fn material(&self, point: Vec3) -> &Material {
        match self {
            Primitive::Sphere(s) => s.material(),
            Primitive::Plane(p) => p.material(point),
            Primitive::Triangle(t) => t.material(),
        }
    }
}
