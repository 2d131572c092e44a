//! Infinite plane with an optional floor checker pattern.

use crate::primitive::PARALLEL_EPSILON;
use crate::{Material, Ray};
use whitted_math::{Interval, Vec3};

/// An infinite plane through `point`.
///
/// Only rays travelling along the stored normal (`normal · direction` above
/// a small epsilon) can hit it; the shading normal faces back against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal
    normal: Vec3,
    point: Vec3,
    material: Material,
    /// Alternate material for the checker pattern
    checker: Option<Material>,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(normal: Vec3, point: Vec3, material: Material) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
            material,
            checker: None,
        }
    }

    /// Alternate with `material` on a 2x2 world-unit grid in x and z.
    pub fn with_checker(mut self, material: Material) -> Self {
        self.checker = Some(material);
        self
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn intersect(&self, ray: Ray) -> Ray {
        let denom = self.normal.dot(ray.direction);
        if denom <= PARALLEL_EPSILON {
            return ray;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
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

    /// Material at a point; the checker material wins on even cells.
    pub fn material(&self, point: Vec3) -> &Material {
        match &self.checker {
            Some(checker) if is_even_cell(point) => checker,
            _ => &self.material,
        }
    }
}

fn is_even_cell(point: Vec3) -> bool {
    let parity = (point.x / 2.0).floor() + (point.z / 2.0).floor();
    parity.rem_euclid(2.0) == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        // Normal points down, so rays from above heading down can hit it
        Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, -3.0, 0.0), Material::new())
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::unbounded(Vec3::ZERO, Vec3::NEG_Y);
        assert!((plane.intersect(ray).t - 3.0).abs() < 0.001);

        // Oblique
        let ray = Ray::unbounded(Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0).normalize());
        let hit = plane.intersect(ray);
        assert!((hit.end().y + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_plane_parallel_miss() {
        let plane = floor();
        let ray = Ray::unbounded(Vec3::ZERO, Vec3::X);
        assert_eq!(plane.intersect(ray), ray);
    }

    #[test]
    fn test_plane_wrong_side_miss() {
        let plane = floor();
        let ray = Ray::unbounded(Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
        assert_eq!(plane.intersect(ray), ray);
    }

    #[test]
    fn test_plane_behind_origin_miss() {
        let plane = floor();
        // Already below the plane, still heading down
        let ray = Ray::unbounded(Vec3::new(0.0, -5.0, 0.0), Vec3::NEG_Y);
        assert_eq!(plane.intersect(ray), ray);
    }

    #[test]
    fn test_plane_respects_bound() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y, 2.0);
        assert_eq!(plane.intersect(ray).t, 2.0);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y, 10.0);
        assert!((plane.intersect(ray).t - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_plane_normal_faces_rays() {
        let plane = floor();
        assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_checker_pattern() {
        let white = Material::new().with_diffuse(Vec3::ONE);
        let black = Material::new();
        let plane = Plane::new(Vec3::NEG_Y, Vec3::new(0.0, -3.0, 0.0), black).with_checker(white);

        assert_eq!(*plane.material(Vec3::new(0.5, -3.0, 0.5)), white);
        assert_eq!(*plane.material(Vec3::new(2.5, -3.0, 0.5)), black);
        assert_eq!(*plane.material(Vec3::new(2.5, -3.0, 2.5)), white);
        assert_eq!(*plane.material(Vec3::new(-0.5, -3.0, 0.5)), black);
        assert_eq!(*plane.material(Vec3::new(-0.5, -3.0, -0.5)), white);
    }

    #[test]
    fn test_no_checker_single_material() {
        let plane = floor();
        assert_eq!(*plane.material(Vec3::new(0.5, -3.0, 0.5)), Material::new());
        assert_eq!(*plane.material(Vec3::new(2.5, -3.0, 0.5)), Material::new());
    }
}
