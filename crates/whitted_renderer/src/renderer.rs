//! Whitted-style recursive shading and frame rendering.
//!
//! Implements:
//! - Direct illumination per light (inverse-square falloff, Lambert diffuse,
//!   Phong specular) with hard shadows
//! - Ambient term
//! - Mirror recursion, terminated by depth alone
//! - Box-filtered supersampling
//! - Row-parallel frames via rayon

use std::time::Instant;

use crate::{
    Camera, Color, DebugRay, Intersection, Light, NoDebug, Ray, RayKind, RaySink, RenderError,
    RenderResult, Scene,
};
use rayon::prelude::*;
use whitted_math::Interval;

/// Offset of a mirror bounce origin along the reflected direction.
pub const REFLECTION_BIAS: f32 = 1e-3;

/// Largest recursion depth the runtime controls accept.
pub const MAX_RECURSION_DEPTH: u32 = 9;

/// Debug rays are recorded every this many output columns.
pub const DEBUG_RAY_SPACING: u32 = 40;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Supersamples per pixel along each axis
    pub ssaa: u32,
    /// Maximum mirror bounces
    pub recursion_depth: u32,
    /// Full shading; when off, hits show their diffuse color
    pub shading: bool,
    /// Color of misses when shading is off
    pub background: Color,
    /// Record debug ray segments on the center row
    pub debug_rays: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            ssaa: 1,
            recursion_depth: 2,
            shading: true,
            background: Color::ZERO,
            debug_rays: false,
        }
    }
}

impl RenderConfig {
    /// Check that the frame has at least one sample.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.ssaa == 0 {
            return Err(RenderError::InvalidConfig(
                "ssaa must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Clamp a requested recursion depth to `[0, MAX_RECURSION_DEPTH]`.
pub fn clamp_recursion_depth(depth: u32) -> u32 {
    if depth > MAX_RECURSION_DEPTH {
        log::warn!(
            "Recursion depth {} clamped to {}",
            depth,
            MAX_RECURSION_DEPTH
        );
    }
    depth.min(MAX_RECURSION_DEPTH)
}

/// Light arriving at a hit directly from one light.
///
/// Zero when the light's cone excludes the point or anything blocks the
/// shadow ray. `omit_specular` drops the Phong highlight, which mirrors
/// already get from their reflection.
pub fn direct_illumination(
    scene: &Scene,
    ray: &Ray,
    hit: &Intersection,
    light: &Light,
    omit_specular: bool,
    sink: &mut dyn RaySink,
) -> Color {
    let Some(shadow) = light.shadow_ray(hit) else {
        return Color::ZERO;
    };
    if scene.does_intersect(&shadow) {
        return Color::ZERO;
    }

    let normal = hit.normal;
    let reflected = (-shadow.direction).reflect(normal);
    sink.record(DebugRay::new(shadow, RayKind::Shadow));
    sink.record(DebugRay::new(
        Ray::new(hit.point, reflected, 1.0),
        RayKind::Specular,
    ));

    let falloff = 1.0 / (shadow.t * shadow.t);
    let material = hit.material;

    let diffuse = material.diffuse * normal.dot(shadow.direction).max(0.0);
    let specular = if omit_specular {
        Color::ZERO
    } else {
        material.specular
            * (-ray.direction)
                .dot(reflected)
                .max(0.0)
                .powf(material.glossiness)
    };

    falloff * light.color * (diffuse + specular)
}

/// Color carried back along `ray` for one light.
///
/// Misses return the skydome. Hits sum the mirror bounce (while `depth > 0`),
/// direct illumination and the ambient term.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    hit: &Intersection,
    light: &Light,
    depth: u32,
    sink: &mut dyn RaySink,
) -> Color {
    if !hit.is_hit() {
        return scene.skydome().color(ray.direction);
    }

    let material = hit.material;
    let mut color = Color::ZERO;

    if material.is_mirror() && depth > 0 {
        let direction = ray.direction.reflect(hit.normal).normalize_or_zero();
        let bounce = Ray::unbounded(hit.point + direction * REFLECTION_BIAS, direction);
        let next = scene.intersect(&bounce);
        sink.record(DebugRay::new(bounce.with_t(next.t), RayKind::Mirror));

        color += material.mirror * trace(scene, &bounce, &next, light, depth - 1, sink);
    }

    color += direct_illumination(scene, ray, hit, light, material.is_mirror(), sink);
    color += material.ambient * scene.ambient();
    color
}

/// Color of one camera sample at view-plane coordinates `(u, v)`.
pub fn shade_sample(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    u: f32,
    v: f32,
    sink: &mut dyn RaySink,
) -> Color {
    let ray = camera.primary_ray(u, v);
    let hit = scene.intersect(&ray);

    sink.record(DebugRay::new(ray.with_t(hit.t), RayKind::Primary));
    if hit.is_hit() {
        sink.record(DebugRay::new(
            Ray::new(hit.point, hit.normal, 1.0),
            RayKind::Normal,
        ));
    }

    if config.shading {
        let mut color = Color::ZERO;
        for light in scene.lights() {
            color += trace(scene, &ray, &hit, light, config.recursion_depth, sink);
        }
        color
    } else if hit.is_hit() {
        hit.material.diffuse
    } else {
        config.background
    }
}

/// Pack an HDR color into `0x00RRGGBB`.
///
/// Channels are scaled by 256, clamped to `[0, 255]` and truncated. No gamma.
pub fn to_packed_rgb(color: Color) -> u32 {
    let channel = Interval::new(0.0, 255.0);
    let r = channel.clamp(color.x * 256.0) as u32;
    let g = channel.clamp(color.y * 256.0) as u32;
    let b = channel.clamp(color.z * 256.0) as u32;
    (r << 16) | (g << 8) | b
}

/// One rendered frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Row-major packed `0x00RRGGBB` pixels
    pub pixels: Vec<u32>,
    /// Segments recorded when debug rays are enabled, in row order
    pub debug_rays: Vec<DebugRay>,
}

impl Frame {
    /// Get the packed pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Get the pixel at (x, y) as RGB bytes.
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        unpack(self.get(x, y))
    }

    /// Convert to RGB bytes (for display or saving).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| unpack(p)).collect()
    }

    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.rgb(x, y)))
    }
}

#[inline]
fn unpack(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Render a full frame.
///
/// Output rows are shaded in parallel; each supersample of a pixel is added
/// in the same order a sequential render would use, so results do not depend
/// on thread count.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Frame {
    let start = Instant::now();
    let width = config.width as usize;
    let height = config.height as usize;

    let mut accum = vec![Color::ZERO; width * height];
    let debug_rows: Vec<Vec<DebugRay>> = accum
        .par_chunks_mut(width.max(1))
        .enumerate()
        .map(|(y, row)| render_row(camera, scene, config, y as u32, row))
        .collect();

    let samples = (config.ssaa * config.ssaa) as f32;
    let pixels = accum
        .par_iter()
        .map(|&color| to_packed_rgb(color / samples))
        .collect();
    let debug_rays: Vec<DebugRay> = debug_rows.into_iter().flatten().collect();

    log::debug!(
        "Rendered {}x{} (ssaa {}, depth {}, shading {}) in {:.1} ms",
        config.width,
        config.height,
        config.ssaa,
        config.recursion_depth,
        config.shading,
        start.elapsed().as_secs_f64() * 1000.0
    );
    for segment in &debug_rays {
        log::trace!("{:?}", segment);
    }

    Frame {
        width: config.width,
        height: config.height,
        pixels,
        debug_rays,
    }
}

/// Accumulate all supersamples of output row `y` into `row`.
fn render_row(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    y: u32,
    row: &mut [Color],
) -> Vec<DebugRay> {
    let ssaa = config.ssaa;
    let sample_width = (config.width * ssaa) as f32;
    let sample_height = (config.height * ssaa) as f32;
    let debug_row = config.height * ssaa / 2;

    let mut debug = Vec::new();
    for sy in 0..ssaa {
        let gy = y * ssaa + sy;
        let v = gy as f32 / sample_height;

        for (x, pixel) in row.iter_mut().enumerate() {
            for sx in 0..ssaa {
                let gx = x as u32 * ssaa + sx;
                let u = gx as f32 / sample_width;

                let recorded = config.debug_rays
                    && gy == debug_row
                    && gx % (DEBUG_RAY_SPACING * ssaa) == 0;
                *pixel += if recorded {
                    shade_sample(scene, camera, config, u, v, &mut debug)
                } else {
                    shade_sample(scene, camera, config, u, v, &mut NoDebug)
                };
            }
        }
    }
    debug
}

/// A camera, scene and frame settings kept in sync.
///
/// Runtime controls go through here so the camera's aspect ratio always
/// follows the output resolution.
#[derive(Debug, Clone)]
pub struct Renderer {
    camera: Camera,
    scene: Scene,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(camera: Camera, scene: Scene, config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;

        let mut renderer = Self {
            camera,
            scene,
            config,
        };
        renderer.config.recursion_depth = clamp_recursion_depth(renderer.config.recursion_depth);
        renderer
            .camera
            .change_aspect_ratio(renderer.config.aspect_ratio())?;
        Ok(renderer)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for pose and field-of-view changes.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_recursion_depth(&mut self, depth: u32) {
        self.config.recursion_depth = clamp_recursion_depth(depth);
    }

    pub fn set_ssaa(&mut self, ssaa: u32) {
        self.config.ssaa = ssaa.max(1);
    }

    pub fn set_shading(&mut self, shading: bool) {
        self.config.shading = shading;
    }

    pub fn set_debug_rays(&mut self, debug_rays: bool) {
        self.config.debug_rays = debug_rays;
    }

    pub fn set_background(&mut self, background: Color) {
        self.config.background = background;
    }

    /// Change the output resolution and the camera's aspect ratio with it.
    pub fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;
        config.validate()?;

        self.camera.change_aspect_ratio(config.aspect_ratio())?;
        self.config = config;
        log::debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    /// Render one frame with the current settings.
    pub fn render(&self) -> Frame {
        render(&self.camera, &self.scene, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Plane, Skydome, Sphere};
    use whitted_math::Vec3;

    fn lit_sphere_scene(material: Material) -> (Scene, Light) {
        let light = Light::point(Vec3::new(0.0, 10.0, 0.0), Color::splat(100.0));
        let mut scene = Scene::new(Skydome::solid(Color::ZERO));
        scene.add(Sphere::new(Vec3::ZERO, 1.0, material));
        scene.add_light(light);
        (scene, light)
    }

    /// Ray that hits the unit sphere at `point` from outside.
    fn ray_at(point: Vec3) -> Ray {
        Ray::unbounded(point * 3.0, -point)
    }

    fn expected_diffuse(point: Vec3, light: &Light, kd: Color) -> Color {
        let dist = (light.position - point).length() - 2.0 * crate::SHADOW_BIAS;
        let l = (light.position - point).normalize();
        light.color * kd * point.dot(l).max(0.0) / (dist * dist)
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let kd = Color::ONE;
        let (scene, light) = lit_sphere_scene(Material::new().with_diffuse(kd));

        let points = [
            Vec3::Y,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(0.0, 0.3, -1.0).normalize(),
        ];
        for point in points {
            let ray = ray_at(point);
            let hit = scene.intersect(&ray);
            assert!(hit.is_hit());

            let got = direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug);
            let want = expected_diffuse(point, &light, kd);
            assert!((got - want).length() < 0.001, "{:?} vs {:?}", got, want);
        }
    }

    #[test]
    fn test_diffuse_zero_when_perpendicular() {
        let (scene, light) = lit_sphere_scene(Material::new().with_diffuse(Color::ONE));

        // Tangent point: p · (L - p) = 0 with |p| = 1 and L = (0, 10, 0)
        let point = Vec3::new((1.0f32 - 0.01).sqrt(), 0.1, 0.0);
        let ray = ray_at(point);
        let hit = scene.intersect(&ray);
        assert!(hit.is_hit());

        let got = direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug);
        assert!(got.length() < 0.001);
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let (mut scene, light) = lit_sphere_scene(Material::new().with_diffuse(Color::ONE));
        scene.add(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Material::new()));

        let ray = ray_at(Vec3::Y);
        let hit = scene.intersect(&ray);
        let got = direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug);
        assert_eq!(got, Color::ZERO);
    }

    #[test]
    fn test_spot_light_outside_cone_is_dark() {
        let mut scene = Scene::new(Skydome::solid(Color::ZERO));
        let floor = Material::new().with_diffuse(Color::ONE);
        scene.add(Plane::new(Vec3::NEG_Y, Vec3::ZERO, floor));
        let light = Light::spot(Vec3::new(0.0, 10.0, 0.0), Color::splat(100.0), Vec3::Y, 30.0);
        scene.add_light(light);

        // 45 degrees off axis
        let ray = Ray::unbounded(Vec3::new(10.0, 1.0, 0.0), Vec3::NEG_Y);
        let hit = scene.intersect(&ray);
        assert!(hit.is_hit());
        assert_eq!(
            direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug),
            Color::ZERO
        );

        // Straight below is lit
        let ray = Ray::unbounded(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let hit = scene.intersect(&ray);
        assert!(direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug).x > 0.0);
    }

    #[test]
    fn test_specular_highlight() {
        let material = Material::new()
            .with_specular(Color::ONE)
            .with_glossiness(10.0);
        let (scene, light) = lit_sphere_scene(material);

        // Viewed from straight above, the highlight is at full strength
        let ray = Ray::unbounded(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y);
        let hit = scene.intersect(&ray);
        let dist = 9.0 - 2.0 * crate::SHADOW_BIAS;

        let got = direct_illumination(&scene, &ray, &hit, &light, false, &mut NoDebug);
        assert!((got - light.color / (dist * dist)).length() < 0.001);

        let omitted = direct_illumination(&scene, &ray, &hit, &light, true, &mut NoDebug);
        assert_eq!(omitted, Color::ZERO);
    }

    #[test]
    fn test_miss_returns_skydome() {
        let sky = Skydome::solid(Color::new(0.2, 0.4, 0.6));
        let mut scene = Scene::new(sky.clone());
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::new()));
        let light = Light::point(Vec3::new(0.0, 10.0, 0.0), Color::ONE);

        let ray = Ray::unbounded(Vec3::ZERO, Vec3::new(0.3, 1.0, 0.2));
        let hit = scene.intersect(&ray);
        assert!(!hit.is_hit());
        assert_eq!(
            trace(&scene, &ray, &hit, &light, 2, &mut NoDebug),
            sky.color(ray.direction)
        );
    }

    #[test]
    fn test_mirror_at_depth_zero_has_no_reflection() {
        let mirror = Material::new()
            .with_mirror(Color::ONE)
            .with_diffuse(Color::splat(0.5))
            .with_specular(Color::ONE)
            .with_ambient(Color::splat(0.1));
        let (scene, light) = lit_sphere_scene(mirror);
        let mut scene = scene.with_ambient(Color::splat(0.1));
        scene.set_skydome(Skydome::solid(Color::splat(5.0)));

        let ray = ray_at(Vec3::new(0.0, 0.5, -1.0).normalize());
        let hit = scene.intersect(&ray);

        let direct = direct_illumination(&scene, &ray, &hit, &light, true, &mut NoDebug);
        let ambient = mirror.ambient * scene.ambient();
        let at_zero = trace(&scene, &ray, &hit, &light, 0, &mut NoDebug);
        assert!((at_zero - (direct + ambient)).length() < 1e-5);

        // One bounce picks up the bright sky
        let at_one = trace(&scene, &ray, &hit, &light, 1, &mut NoDebug);
        assert!((at_one - at_zero - Color::splat(5.0)).length() < 0.001);
    }

    #[test]
    fn test_mirror_bounce_recorded() {
        let (scene, light) = lit_sphere_scene(Material::new().with_mirror(Color::ONE));
        let ray = ray_at(Vec3::Y);
        let hit = scene.intersect(&ray);

        let mut sink: Vec<DebugRay> = Vec::new();
        trace(&scene, &ray, &hit, &light, 1, &mut sink);
        assert!(sink.iter().any(|d| d.kind == RayKind::Mirror));
        assert!(sink.iter().any(|d| d.kind == RayKind::Shadow));
    }

    #[test]
    fn test_mirror_bounce_direction() {
        let mut scene = Scene::new(Skydome::solid(Color::ZERO));
        let floor = Material::new().with_mirror(Color::ONE);
        scene.add(Plane::new(Vec3::NEG_Y, Vec3::ZERO, floor));
        let light = Light::point(Vec3::new(0.0, 10.0, 0.0), Color::ONE);

        // 45 degrees down onto the floor, leaving 45 degrees up
        let ray = Ray::unbounded(
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0).normalize(),
        );
        let hit = scene.intersect(&ray);
        assert!(hit.is_hit());

        let mut sink: Vec<DebugRay> = Vec::new();
        trace(&scene, &ray, &hit, &light, 1, &mut sink);
        let bounce = sink
            .iter()
            .find(|d| d.kind == RayKind::Mirror)
            .map(|d| d.ray)
            .unwrap();

        let want = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((bounce.direction - want).length() < 1e-5);
        assert!(bounce.origin.y > 0.0);
    }

    #[test]
    fn test_to_packed_rgb() {
        assert_eq!(to_packed_rgb(Color::ZERO), 0x000000);
        assert_eq!(to_packed_rgb(Color::ONE), 0xFFFFFF);
        assert_eq!(to_packed_rgb(Color::new(0.5, 0.25, 0.0)), 0x804000);
        assert_eq!(to_packed_rgb(Color::new(-1.0, 1000.0, 0.999)), 0x00FFFF);
        assert_eq!(to_packed_rgb(Color::new(f32::NAN, 0.0, 0.0)), 0);
    }

    fn sky_only(sky: Color) -> (Camera, Scene) {
        let camera = Camera::new(Vec3::ZERO, Vec3::Z, 60.0).unwrap();
        let mut scene = Scene::new(Skydome::solid(sky));
        scene.add_light(Light::point(Vec3::new(0.0, 10.0, 0.0), Color::ONE));
        (camera, scene)
    }

    #[test]
    fn test_render_empty_scene_shows_sky() {
        let (camera, scene) = sky_only(Color::new(0.25, 0.5, 0.125));
        let config = RenderConfig {
            width: 4,
            height: 3,
            ..Default::default()
        };
        let frame = render(&camera, &scene, &config);

        assert_eq!(frame.pixels.len(), 12);
        assert!(frame.pixels.iter().all(|&p| p == 0x408020));
        assert_eq!(frame.rgb(3, 2), [64, 128, 32]);
    }

    #[test]
    fn test_ssaa_flat_region_matches() {
        let (camera, scene) = sky_only(Color::new(0.25, 0.5, 0.125));
        let one = RenderConfig {
            width: 8,
            height: 8,
            ssaa: 1,
            ..Default::default()
        };
        let two = RenderConfig { ssaa: 2, ..one.clone() };

        assert_eq!(
            render(&camera, &scene, &one).pixels,
            render(&camera, &scene, &two).pixels
        );
    }

    #[test]
    fn test_ssaa_flat_preview_matches() {
        // A wall filling the view, shading off
        let camera = Camera::new(Vec3::ZERO, Vec3::Z, 60.0).unwrap();
        let mut scene = Scene::new(Skydome::solid(Color::ZERO));
        let wall = Material::new().with_diffuse(Color::splat(0.5));
        scene.add(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, 10.0), wall));

        let one = RenderConfig {
            width: 6,
            height: 6,
            shading: false,
            ..Default::default()
        };
        let two = RenderConfig { ssaa: 2, ..one.clone() };

        let a = render(&camera, &scene, &one);
        let b = render(&camera, &scene, &two);
        assert_eq!(a.pixels, b.pixels);
        assert!(a.pixels.iter().all(|&p| p == 0x808080));
    }

    #[test]
    fn test_flat_preview_background() {
        let (camera, scene) = sky_only(Color::ONE);
        let config = RenderConfig {
            width: 2,
            height: 2,
            shading: false,
            background: Color::new(0.0, 0.0, 0.5),
            ..Default::default()
        };
        let frame = render(&camera, &scene, &config);
        assert!(frame.pixels.iter().all(|&p| p == 0x000080));
    }

    #[test]
    fn test_debug_rays_center_row() {
        let (camera, scene) = sky_only(Color::ONE);
        for ssaa in [1, 2] {
            let config = RenderConfig {
                width: 80,
                height: 4,
                ssaa,
                debug_rays: true,
                ..Default::default()
            };
            let frame = render(&camera, &scene, &config);

            // Columns 0 and 40, primary rays only since nothing is hit
            assert_eq!(frame.debug_rays.len(), 2);
            assert!(frame.debug_rays.iter().all(|d| d.kind == RayKind::Primary));
        }

        let config = RenderConfig {
            width: 80,
            height: 4,
            ..Default::default()
        };
        assert!(render(&camera, &scene, &config).debug_rays.is_empty());
    }

    #[test]
    fn test_frame_to_image() {
        let frame = Frame {
            width: 2,
            height: 1,
            pixels: vec![0xFF0000, 0x0000FF],
            debug_rays: Vec::new(),
        };
        assert_eq!(frame.to_rgb_bytes(), vec![255, 0, 0, 0, 0, 255]);

        let img = frame.to_image();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_config_validate() {
        assert!(RenderConfig::default().validate().is_ok());
        let zero = RenderConfig {
            width: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
        let no_samples = RenderConfig {
            ssaa: 0,
            ..Default::default()
        };
        assert!(no_samples.validate().is_err());
    }

    #[test]
    fn test_renderer_controls() {
        let (camera, scene) = sky_only(Color::ONE);
        let mut renderer = Renderer::new(camera, scene, RenderConfig::default()).unwrap();

        renderer.set_recursion_depth(12);
        assert_eq!(renderer.config().recursion_depth, MAX_RECURSION_DEPTH);
        renderer.set_ssaa(0);
        assert_eq!(renderer.config().ssaa, 1);

        renderer.resize(320, 160).unwrap();
        assert_eq!(renderer.config().width, 320);
        assert!((renderer.camera().view_height() - 1.0).abs() < 0.001);

        // A rejected resize changes nothing
        assert!(renderer.resize(0, 10).is_err());
        assert_eq!(renderer.config().width, 320);

        let frame = renderer.render();
        assert_eq!((frame.width, frame.height), (320, 160));
    }
}
