//! Result of a nearest-hit query.

use crate::{Material, Primitive, Ray};
use whitted_math::Vec3;

static DEFAULT_MATERIAL: Material = Material::new();

/// Record of a ray-scene query.
///
/// `primitive` is `None` when the ray escaped to the environment; the normal
/// is then zero and the material is the default.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the ray (the ray's final bound)
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Primitive that was hit
    pub primitive: Option<&'a Primitive>,
    /// Shading normal at the hit point
    pub normal: Vec3,
    /// Material at the hit point
    pub material: &'a Material,
}

impl<'a> Intersection<'a> {
    /// Build the record from a ray whose bound is the hit distance.
    pub fn new(ray: &Ray, primitive: Option<&'a Primitive>) -> Self {
        let point = ray.end();
        match primitive {
            Some(p) => Self {
                t: ray.t,
                point,
                primitive,
                normal: p.normal(point),
                material: p.material(point),
            },
            None => Self {
                t: ray.t,
                point,
                primitive: None,
                normal: Vec3::ZERO,
                material: &DEFAULT_MATERIAL,
            },
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.primitive.is_some()
    }
}
