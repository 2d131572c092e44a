//! Decoded environment images.
//!
//! The skydome samples a rectangular grid of linear float RGB values. This
//! module owns that grid and the code that fills it from an image file, so
//! the renderer never deals with file formats.

use std::path::Path;

use thiserror::Error;
use whitted_math::Vec3;

/// Errors that can occur during image loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load image: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pixel count {actual} does not match {expected} ({width}x{height})")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded image with linear float RGB pixels.
///
/// Values are unbounded above; Radiance HDR skies routinely carry channel
/// values in the tens of thousands.
#[derive(Clone, Debug)]
pub struct HdrImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Row-major pixels, top row first
    pub pixels: Vec<Vec3>,

    /// Original file path (for debugging)
    pub path: String,
}

impl HdrImage {
    /// Create an image from pixel data, checking the pixel count.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Vec3>,
        path: impl Into<String>,
    ) -> TextureResult<Self> {
        let expected = width as usize * height as usize;
        if expected == 0 || pixels.len() != expected {
            return Err(TextureError::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            path: path.into(),
        })
    }

    /// Create a solid color image (1x1).
    pub fn solid_color(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
            path: "<solid>".to_string(),
        }
    }

    /// Get pixel at integer coordinates. Out of range reads return black.
    pub fn get_pixel(&self, x: u32, y: u32) -> Vec3 {
        if x >= self.width || y >= self.height {
            return Vec3::ZERO;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().unwrap_or(Vec3::ZERO)
    }

    /// Get total size in bytes (approximate).
    pub fn size_bytes(&self) -> usize {
        self.pixels.len() * std::mem::size_of::<Vec3>()
    }
}

/// Load an image file into linear float RGB.
///
/// Radiance `.hdr` files decode to their stored radiance. LDR formats decode
/// to `[0, 1]` without any gamma conversion.
pub fn load_hdr(path: impl AsRef<Path>) -> TextureResult<HdrImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TextureError::LoadError(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let img = image::open(path)?.to_rgb32f();
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| Vec3::from_array(p.0)).collect();

    let image = HdrImage::from_pixels(width, height, pixels, path.display().to_string())?;

    log::debug!(
        "Loaded image: {} ({}x{}, {:.1} KB)",
        image.path,
        image.width,
        image.height,
        image.size_bytes() as f32 / 1024.0
    );

    Ok(image)
}
