//! Point and spot lights, and shadow ray construction.

use crate::{Color, Intersection, Ray};
use whitted_math::Vec3;

/// Offset applied to shadow ray origins and subtracted (twice) from their
/// length, keeping both the surface and the light out of the occlusion test.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Cone restricting a spot light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotCone {
    /// Unit cone axis, pointing from lit surfaces toward the light
    direction: Vec3,
    /// Half-angle in degrees
    half_angle: f32,
}

impl SpotCone {
    pub fn new(direction: Vec3, half_angle: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            half_angle,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn half_angle(&self) -> f32 {
        self.half_angle
    }

    /// Whether a point lit along `to_light` (unit) falls inside the cone.
    fn contains(&self, to_light: Vec3) -> bool {
        let cos = self.direction.dot(to_light).clamp(-1.0, 1.0);
        cos.acos().to_degrees() <= self.half_angle
    }
}

/// A point light, optionally restricted to a cone.
///
/// Colors are HDR and falloff is inverse-square, so useful intensities are
/// in the hundreds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    pub cone: Option<SpotCone>,
}

impl Light {
    /// A light shining in every direction.
    pub fn point(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            cone: None,
        }
    }

    /// A light that only reaches points within `half_angle` degrees of
    /// `direction` as seen from the light.
    pub fn spot(position: Vec3, color: Color, direction: Vec3, half_angle: f32) -> Self {
        Self {
            position,
            color,
            cone: Some(SpotCone::new(direction, half_angle)),
        }
    }

    /// Ray from the hit point toward this light for occlusion testing.
    ///
    /// Returns `None` when a spot light's cone excludes the point; the light
    /// then contributes nothing there.
    pub fn shadow_ray(&self, hit: &Intersection) -> Option<Ray> {
        let to_light = self.position - hit.point;
        let direction = to_light.normalize_or_zero();

        if let Some(cone) = &self.cone {
            if !cone.contains(direction) {
                return None;
            }
        }

        Some(Ray::new(
            hit.point + hit.normal * SHADOW_BIAS,
            direction,
            to_light.length() - 2.0 * SHADOW_BIAS,
        ))
    }
}
