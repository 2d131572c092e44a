//! Error types for camera setup and rendering.

use thiserror::Error;
use whitted_core::SceneError;

/// Camera configuration failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Camera direction and up are not orthogonal (dot = {dot})")]
    NotOrthogonal { dot: f32 },

    #[error("Camera direction is zero or parallel to world up")]
    DegenerateOrientation,

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("Aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f32),
}

/// Errors surfaced while assembling or rendering a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
