//! Pinhole camera and view-plane derivation.
//!
//! The camera keeps its public parameters (position, direction, up, field of
//! view, view-plane size) and caches the view rectangle derived from them.
//! The rectangle is rebuilt from scratch whenever a parameter changes, so
//! repeated updates never drift.
//!
//! The frame is left-handed: looking down +Z with +Y up, +X is screen right
//! and `left()` is -X.

use crate::{CameraError, Ray};
use whitted_math::{Vec3, Vec3Ext};

/// Maximum |direction · up| accepted for a camera frame.
pub const ORTHOGONALITY_TOLERANCE: f32 = 1e-4;

/// Default translation step for interactive controls.
pub const MOVE_SPEED: f32 = 0.7;

/// Default rotation step for interactive controls, in radians.
pub const ROTATION_SPEED: f32 = 0.05;

/// Default field-of-view step for interactive controls, in degrees.
pub const FOV_STEP: f32 = 5.0;

/// A camera pose change in the camera's own frame.
///
/// Translations are in world units; rotations are in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraMotion {
    pub right: f32,
    pub up: f32,
    pub forward: f32,
    /// Rotation about the left axis
    pub pitch: f32,
    /// Rotation about the up axis
    pub yaw: f32,
    /// Rotation about the view direction
    pub roll: f32,
}

impl CameraMotion {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Camera for generating primary rays.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    up: Vec3,
    fov: f32, // Horizontal field of view in degrees

    // View plane size; height follows the aspect ratio
    view_width: f32,
    view_height: f32,

    // Cached computed values (set by update_view_plane())
    screen_center: Vec3,
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
}

impl Camera {
    /// Create a camera looking along `direction`.
    ///
    /// Up is derived from world up `(0, 1, 0)` with two cross products, so it
    /// is orthogonal to the direction even when the camera looks up or down.
    /// A direction parallel to world up has no such vector and is rejected.
    pub fn new(position: Vec3, direction: Vec3, fov: f32) -> Result<Self, CameraError> {
        let up = (-direction).cross(Vec3::Y);
        let up = direction.cross(up);
        Self::with_frame(position, direction, up, fov)
    }

    /// Create a camera with an explicit up vector.
    ///
    /// Fails if `up` is not orthogonal to `direction` within
    /// [`ORTHOGONALITY_TOLERANCE`].
    pub fn with_frame(
        position: Vec3,
        direction: Vec3,
        up: Vec3,
        fov: f32,
    ) -> Result<Self, CameraError> {
        Self::build(position, direction, up, fov, 2.0, 2.0)
    }

    fn build(
        position: Vec3,
        direction: Vec3,
        up: Vec3,
        fov: f32,
        view_width: f32,
        view_height: f32,
    ) -> Result<Self, CameraError> {
        check_fov(fov)?;

        let direction = direction.normalize_or_zero();
        let up = up.normalize_or_zero();
        if direction == Vec3::ZERO || up == Vec3::ZERO {
            return Err(CameraError::DegenerateOrientation);
        }

        let dot = direction.dot(up);
        // Written so NaN fails too
        if !(dot.abs() <= ORTHOGONALITY_TOLERANCE) {
            return Err(CameraError::NotOrthogonal { dot });
        }

        let mut camera = Self {
            position,
            direction,
            up,
            fov,
            view_width,
            view_height,
            screen_center: Vec3::ZERO,
            p0: Vec3::ZERO,
            p1: Vec3::ZERO,
            p2: Vec3::ZERO,
        };
        camera.update_view_plane();
        Ok(camera)
    }

    /// Rebuild the view rectangle from the current parameters.
    fn update_view_plane(&mut self) {
        let distance = 1.0 / (self.fov.to_radians() / 2.0).tan();
        self.screen_center = self.position + distance * self.direction;

        let half_up = self.up * (self.view_height / 2.0);
        let half_left = self.left() * (self.view_width / 2.0);

        self.p0 = self.screen_center + half_up + half_left;
        self.p1 = self.screen_center + half_up - half_left;
        self.p2 = self.screen_center - half_up + half_left;
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[inline]
    pub fn left(&self) -> Vec3 {
        self.direction.cross(self.up)
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    pub fn screen_center(&self) -> Vec3 {
        self.screen_center
    }

    /// Top-left, top-right and bottom-left corners of the view rectangle.
    pub fn corners(&self) -> [Vec3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Point on the view rectangle at `(u, v)`, with `(0, 0)` top-left,
    /// `u` running right and `v` running down.
    ///
    /// Corner inputs return the cached corners exactly.
    pub fn point_on_screen(&self, u: f32, v: f32) -> Vec3 {
        self.p0 * (1.0 - u - v) + self.p1 * u + self.p2 * v
    }

    /// Primary ray from the eye through the view rectangle at `(u, v)`.
    pub fn primary_ray(&self, u: f32, v: f32) -> Ray {
        let target = self.point_on_screen(u, v);
        Ray::unbounded(self.position, (target - self.position).normalize())
    }

    /// Change the horizontal field of view (degrees).
    pub fn set_fov(&mut self, fov: f32) -> Result<(), CameraError> {
        check_fov(fov)?;
        self.fov = fov;
        self.update_view_plane();
        Ok(())
    }

    /// Rescale the view height to `width / aspect_ratio`, keeping the width.
    pub fn change_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<(), CameraError> {
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(CameraError::InvalidAspectRatio(aspect_ratio));
        }
        self.view_height = self.view_width / aspect_ratio;
        self.update_view_plane();
        Ok(())
    }

    /// Translate in the camera frame, then pitch, roll and yaw in that order.
    ///
    /// On error the camera is left unchanged.
    pub fn move_camera(&mut self, motion: CameraMotion) -> Result<(), CameraError> {
        let left = self.left();
        let position = self.position
            + left * -motion.right
            + self.up * motion.up
            + self.direction * motion.forward;

        let direction = self.direction.rotate_about(left, motion.pitch);
        let up = self.up.rotate_about(left, motion.pitch);
        let up = up.rotate_about(direction, -motion.roll);
        let direction = direction.rotate_about(up, motion.yaw);

        *self = Self::build(
            position,
            direction,
            up,
            self.fov,
            self.view_width,
            self.view_height,
        )?;
        Ok(())
    }
}

fn check_fov(fov: f32) -> Result<(), CameraError> {
    if fov > 0.0 && fov < 180.0 {
        Ok(())
    } else {
        Err(CameraError::InvalidFov(fov))
    }
}
