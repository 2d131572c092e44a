//! Phong-style surface description.

use whitted_math::Vec3;

/// Color type alias. Channels are linear and unbounded above (HDR).
pub type Color = Vec3;

/// Surface reflectance for direct lighting and mirror recursion.
///
/// Every color is a per-channel multiplier. Values above 1 are allowed and
/// used for bright highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Lambertian term (`Kd`)
    pub diffuse: Color,
    /// Phong highlight term (`Ks`)
    pub specular: Color,
    /// Multiplier for the scene's ambient light (`Ka`)
    pub ambient: Color,
    /// Mirror reflectance (`Km`); any non-zero value makes the surface a mirror
    pub mirror: Color,
    /// Phong exponent
    pub glossiness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

impl Material {
    /// A black, non-mirror material with glossiness 1.
    pub const fn new() -> Self {
        Self {
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            ambient: Color::ZERO,
            mirror: Color::ZERO,
            glossiness: 1.0,
        }
    }

    pub fn with_diffuse(mut self, diffuse: Color) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_mirror(mut self, mirror: Color) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_glossiness(mut self, glossiness: f32) -> Self {
        self.glossiness = glossiness;
        self
    }

    /// True when the mirror color has non-zero magnitude.
    #[inline]
    pub fn is_mirror(&self) -> bool {
        self.mirror.length() > 0.0
    }
}

impl From<&whitted_core::MaterialDesc> for Material {
    fn from(desc: &whitted_core::MaterialDesc) -> Self {
        Material::new()
            .with_diffuse(desc.diffuse)
            .with_specular(desc.specular)
            .with_ambient(desc.ambient)
            .with_mirror(desc.mirror)
            .with_glossiness(desc.glossiness)
    }
}
