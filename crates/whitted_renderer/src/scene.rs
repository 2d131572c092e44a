//! Scene container and visibility queries.

use crate::{Color, Intersection, Light, Primitive, Ray, Skydome};

/// Everything a frame is rendered from, apart from the camera.
///
/// Primitive order only matters for ties: when two primitives report the
/// same distance, the first one added wins.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    ambient: Color,
    skydome: Skydome,
}

impl Scene {
    /// Create an empty scene with no ambient light.
    pub fn new(skydome: Skydome) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            ambient: Color::ZERO,
            skydome,
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn set_skydome(&mut self, skydome: Skydome) {
        self.skydome = skydome;
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn skydome(&self) -> &Skydome {
        &self.skydome
    }

    /// Nearest hit along `ray` within its bound.
    pub fn intersect(&self, ray: &Ray) -> Intersection<'_> {
        let (nearest, hit) = self
            .primitives
            .iter()
            .fold((*ray, None), |(best, hit), primitive| {
                let next = primitive.intersect(best);
                if next.t < best.t {
                    (next, Some(primitive))
                } else {
                    (best, hit)
                }
            });

        Intersection::new(&nearest, hit)
    }

    /// Whether anything lies along `ray` within its bound.
    ///
    /// Stops at the first primitive that tightens the bound, which need not
    /// be the nearest.
    pub fn does_intersect(&self, ray: &Ray) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect(*ray).t < ray.t)
    }
}
