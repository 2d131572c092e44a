//! JSON scene description.
//!
//! A scene file names its materials once and lets primitives refer to them
//! by name. All vectors are written as `[x, y, z]` arrays:
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0, 0], "direction": [0, 0, 1], "fov": 60 },
//!   "materials": { "red": { "diffuse": [1, 0, 0], "ambient": [0.1, 0.1, 0.1] } },
//!   "primitives": [ { "type": "sphere", "center": [0, 0, 10], "radius": 2, "material": "red" } ],
//!   "lights": [ { "type": "point", "position": [0, 10, 0], "color": [200, 200, 200] } ],
//!   "ambient": [0.1, 0.1, 0.1],
//!   "skydome": { "path": "sky.hdr", "exposure": 600000 }
//! }
//! ```
//!
//! This module only parses and checks references. Turning a description into
//! renderable objects is the renderer's job.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use whitted_math::Vec3;

use crate::texture::{load_hdr, HdrImage, TextureError};

/// Errors that can occur while reading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Skydome exposure must be positive, got {0}")]
    InvalidExposure(f32),

    #[error("Skydome image: {0}")]
    Texture(#[from] TextureError),
}

pub type SceneResult<T> = Result<T, SceneError>;

fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(Vec3::from_array(arr))
}

fn option_vec3_from_array<'de, D>(d: D) -> Result<Option<Vec3>, D::Error>
where
    D: Deserializer<'de>,
{
    let arr = Option::<[f32; 3]>::deserialize(d)?;
    Ok(arr.map(Vec3::from_array))
}

fn default_glossiness() -> f32 {
    1.0
}

fn default_exposure() -> f32 {
    1.0
}

/// Camera placement.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraDesc {
    #[serde(deserialize_with = "vec3_from_array")]
    pub position: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub direction: Vec3,
    /// Field of view in degrees
    pub fov: f32,
}

/// Frame settings. Every field is optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderDesc {
    pub width: u32,
    pub height: u32,
    pub ssaa: u32,
    pub recursion_depth: u32,
    pub shading: bool,
}

impl Default for RenderDesc {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            ssaa: 1,
            recursion_depth: 2,
            shading: true,
        }
    }
}

/// Phong-style surface coefficients. Missing colors are black.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialDesc {
    #[serde(default, deserialize_with = "vec3_from_array")]
    pub diffuse: Vec3,
    #[serde(default, deserialize_with = "vec3_from_array")]
    pub specular: Vec3,
    #[serde(default, deserialize_with = "vec3_from_array")]
    pub ambient: Vec3,
    #[serde(default, deserialize_with = "vec3_from_array")]
    pub mirror: Vec3,
    #[serde(default = "default_glossiness")]
    pub glossiness: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrimitiveDesc {
    Sphere {
        #[serde(deserialize_with = "vec3_from_array")]
        center: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        #[serde(deserialize_with = "vec3_from_array")]
        normal: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        point: Vec3,
        material: String,
        /// Second material for the floor checker pattern
        #[serde(default)]
        checker: Option<String>,
    },
    Triangle {
        #[serde(deserialize_with = "vec3_from_array")]
        a: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        b: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        c: Vec3,
        material: String,
    },
}

impl PrimitiveDesc {
    /// Every material name this primitive refers to.
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        let (primary, checker) = match self {
            PrimitiveDesc::Sphere { material, .. } | PrimitiveDesc::Triangle { material, .. } => {
                (material.as_str(), None)
            }
            PrimitiveDesc::Plane {
                material, checker, ..
            } => (material.as_str(), checker.as_deref()),
        };
        std::iter::once(primary).chain(checker)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDesc {
    Point {
        #[serde(deserialize_with = "vec3_from_array")]
        position: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        color: Vec3,
    },
    Spot {
        #[serde(deserialize_with = "vec3_from_array")]
        position: Vec3,
        #[serde(deserialize_with = "vec3_from_array")]
        color: Vec3,
        /// Cone axis, pointing from lit surfaces toward the light
        #[serde(deserialize_with = "vec3_from_array")]
        direction: Vec3,
        /// Cone half-angle in degrees
        angle: f32,
    },
}

/// Environment map source: an image file, or a flat color when no path is
/// given. With neither, the sky is black.
#[derive(Debug, Clone, Deserialize)]
pub struct SkydomeDesc {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "option_vec3_from_array")]
    pub color: Option<Vec3>,
    #[serde(default = "default_exposure")]
    pub exposure: f32,
}

impl Default for SkydomeDesc {
    fn default() -> Self {
        Self {
            path: None,
            color: None,
            exposure: default_exposure(),
        }
    }
}

impl SkydomeDesc {
    /// Decode the sky image. Relative paths resolve against `base_dir`.
    pub fn load_image(&self, base_dir: Option<&Path>) -> SceneResult<HdrImage> {
        match &self.path {
            Some(path) => {
                let full_path = resolve_path(base_dir, path);
                Ok(load_hdr(full_path)?)
            }
            None => Ok(HdrImage::solid_color(self.color.unwrap_or(Vec3::ZERO))),
        }
    }
}

fn resolve_path(base_dir: Option<&Path>, path: &str) -> PathBuf {
    let p = Path::new(path);
    match base_dir {
        Some(base) if p.is_relative() => base.join(p),
        _ => p.to_path_buf(),
    }
}

/// A complete scene as written in a scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDesc,
    #[serde(default)]
    pub render: RenderDesc,
    #[serde(default)]
    pub materials: HashMap<String, MaterialDesc>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    #[serde(default, deserialize_with = "vec3_from_array")]
    pub ambient: Vec3,
    #[serde(default)]
    pub skydome: SkydomeDesc,
}

impl SceneDescription {
    /// Parse and validate a scene from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let desc: SceneDescription = serde_json::from_str(json)?;
        desc.validate()?;
        Ok(desc)
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> SceneResult<&MaterialDesc> {
        self.materials
            .get(name)
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
    }

    /// Check material references and the skydome exposure.
    pub fn validate(&self) -> SceneResult<()> {
        for primitive in &self.primitives {
            for name in primitive.material_names() {
                self.material(name)?;
            }
        }

        let exposure = self.skydome.exposure;
        if !(exposure > 0.0 && exposure.is_finite()) {
            return Err(SceneError::InvalidExposure(exposure));
        }

        Ok(())
    }
}

/// Read, parse and validate a scene file.
pub fn load_scene_description(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let desc = SceneDescription::from_json(&json)?;

    log::debug!(
        "Loaded scene: {} ({} materials, {} primitives, {} lights)",
        path.display(),
        desc.materials.len(),
        desc.primitives.len(),
        desc.lights.len()
    );

    Ok(desc)
}
