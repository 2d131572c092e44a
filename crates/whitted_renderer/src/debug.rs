//! Ray segments recorded for visual debugging.
//!
//! The shading code reports what it traced to a [`RaySink`]; drawing the
//! segments is left to whoever consumes them.

use crate::Ray;

/// What a recorded segment represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RayKind {
    /// Camera ray up to its first hit
    Primary,
    /// Unit surface normal at a hit
    Normal,
    /// Hit point toward a light
    Shadow,
    /// Unit Phong reflection of the light direction
    Specular,
    /// Mirror bounce up to its next hit
    Mirror,
}

/// One segment: the ray's origin, direction and bound give its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugRay {
    pub ray: Ray,
    pub kind: RayKind,
}

impl DebugRay {
    pub fn new(ray: Ray, kind: RayKind) -> Self {
        Self { ray, kind }
    }
}

/// Receiver for debug segments.
pub trait RaySink {
    fn record(&mut self, ray: DebugRay);
}

impl RaySink for Vec<DebugRay> {
    fn record(&mut self, ray: DebugRay) {
        self.push(ray);
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebug;

impl RaySink for NoDebug {
    #[inline]
    fn record(&mut self, _ray: DebugRay) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::Vec3;

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<DebugRay> = Vec::new();
        let sink_ref: &mut dyn RaySink = &mut sink;
        sink_ref.record(DebugRay::new(Ray::new(Vec3::ZERO, Vec3::Z, 2.0), RayKind::Primary));
        sink_ref.record(DebugRay::new(Ray::new(Vec3::ZERO, Vec3::Y, 1.0), RayKind::Normal));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].kind, RayKind::Primary);
        assert_eq!(sink[1].ray.end(), Vec3::Y);
    }
}
