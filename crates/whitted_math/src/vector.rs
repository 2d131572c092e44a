// Vector utilities
//
// Extends glam::Vec3 with the axis-angle rotation the camera controls need.

use glam::Vec3;

/// Extension trait for Vec3 with a rotation helper.
pub trait Vec3Ext {
    /// Rotate around `axis` by `angle` radians (Rodrigues' rotation formula).
    ///
    /// `axis` must be unit length.
    fn rotate_about(self, axis: Vec3, angle: f32) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn rotate_about(self, axis: Vec3, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        self * cos + axis.cross(self) * sin + axis * axis.dot(self) * (1.0 - cos)
    }
}
