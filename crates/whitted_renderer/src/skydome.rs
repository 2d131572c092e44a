//! Equirectangular environment lookup.

use std::f32::consts::PI;

use crate::Color;
use whitted_core::{HdrImage, SceneError, SceneResult};
use whitted_math::Vec3;

/// Background for rays that leave the scene.
///
/// Maps a direction to a texel of a pre-decoded equirectangular image with
/// nearest-texel lookup, then divides by the exposure.
#[derive(Debug, Clone)]
pub struct Skydome {
    image: HdrImage,
    exposure: f32,
}

impl Skydome {
    /// Fails unless `exposure` is positive and finite.
    pub fn new(image: HdrImage, exposure: f32) -> SceneResult<Self> {
        if !(exposure > 0.0 && exposure.is_finite()) {
            return Err(SceneError::InvalidExposure(exposure));
        }
        Ok(Self { image, exposure })
    }

    /// A sky of one color in every direction.
    pub fn solid(color: Color) -> Self {
        Self {
            image: HdrImage::solid_color(color),
            exposure: 1.0,
        }
    }

    pub fn image(&self) -> &HdrImage {
        &self.image
    }

    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Texel coordinates for a direction.
    ///
    /// `u` wraps around the vertical axis starting from -Z; `v` runs from the
    /// zenith (top row) to the nadir. Coordinates landing exactly on 1 wrap
    /// to 0.
    pub fn texel(&self, direction: Vec3) -> (u32, u32) {
        let d = direction.normalize_or_zero();

        let mut u = 0.5 + d.x.atan2(d.z) / (2.0 * PI);
        let mut v = 0.5 - d.y.clamp(-1.0, 1.0).asin() / PI;
        if u >= 1.0 {
            u = 0.0;
        }
        if v >= 1.0 {
            v = 0.0;
        }

        let x = ((u * self.image.width as f32) as u32).min(self.image.width.saturating_sub(1));
        let y = ((v * self.image.height as f32) as u32).min(self.image.height.saturating_sub(1));
        (x, y)
    }

    /// Background color seen along `direction`.
    pub fn color(&self, direction: Vec3) -> Color {
        let (x, y) = self.texel(direction);
        self.image.get_pixel(x, y) / self.exposure
    }
}
