//! Whitted Renderer - CPU recursive ray tracing
//!
//! A Whitted-style ray tracer: primary rays, hard shadows from point and
//! spot lights, Phong shading, and mirror reflection up to a fixed depth,
//! over an equirectangular skydome.
//!
//! Intersection is a linear scan over a closed set of primitives (sphere,
//! plane, triangle). Rendering is deterministic; frames are shaded row by
//! row in parallel.

mod camera;
mod debug;
pub mod demo;
mod error;
mod intersection;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod setup;
mod skydome;
mod sphere;
mod triangle;

pub use camera::{Camera, CameraMotion, FOV_STEP, MOVE_SPEED, ORTHOGONALITY_TOLERANCE, ROTATION_SPEED};
pub use debug::{DebugRay, NoDebug, RayKind, RaySink};
pub use error::{CameraError, RenderError, RenderResult};
pub use intersection::Intersection;
pub use light::{Light, SpotCone, SHADOW_BIAS};
pub use material::{Color, Material};
pub use plane::Plane;
pub use primitive::{Primitive, PARALLEL_EPSILON};
pub use renderer::{
    clamp_recursion_depth, direct_illumination, render, shade_sample, to_packed_rgb, trace, Frame,
    RenderConfig, Renderer, DEBUG_RAY_SPACING, MAX_RECURSION_DEPTH, REFLECTION_BIAS,
};
pub use scene::Scene;
pub use setup::SceneSetup;
pub use skydome::Skydome;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the ray and vector types from whitted_math
pub use whitted_math::{Ray, Vec3};
