//! Whitted Core - resources that live outside the shading core.
//!
//! This crate provides:
//!
//! - **Images**: `HdrImage`, a decoded float RGB pixel grid, and `load_hdr`
//!   for reading Radiance `.hdr` (or any format the `image` crate decodes)
//! - **Scene files**: `SceneDescription`, the JSON scene format, and
//!   `load_scene_description`
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene_description;
//!
//! let desc = load_scene_description("scenes/demo.json")?;
//! println!("{} primitives, {} lights", desc.primitives.len(), desc.lights.len());
//! ```

pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use scene::{
    load_scene_description, CameraDesc, LightDesc, MaterialDesc, PrimitiveDesc, RenderDesc,
    SceneDescription, SceneError, SceneResult, SkydomeDesc,
};
pub use texture::{load_hdr, HdrImage, TextureError, TextureResult};
