//! The stock scene: four spheres, a checkered floor, a mirror wall and a
//! small pyramid under two colored point lights and a white spot light.
//!
//! `scenes/demo.json` describes the same scene for the command line tool.

use crate::{Camera, CameraError, Color, Light, Material, Plane, Scene, Skydome, Sphere, Triangle};
use whitted_math::Vec3;

/// Exposure that brings the stock HDR sky into display range.
pub const DEMO_SKY_EXPOSURE: f32 = 600_000.0;

pub fn demo_camera() -> Result<Camera, CameraError> {
    Camera::new(
        Vec3::new(12.9, 6.8, 36.4),
        Vec3::new(-0.5, -0.3, 0.8),
        60.0,
    )
}

pub fn demo_scene(skydome: Skydome) -> Scene {
    let ambient = Color::splat(0.1);

    let mirror = Material::new().with_mirror(Color::ONE).with_ambient(ambient);
    let dull_yellow = Material::new()
        .with_diffuse(Color::new(0.4, 0.4, 0.0))
        .with_specular(Color::new(1.0, 1.0, 0.0))
        .with_ambient(ambient)
        .with_glossiness(10.0);
    let yellow = Material::new()
        .with_diffuse(Color::new(1.0, 1.0, 0.0))
        .with_specular(Color::new(1.0, 1.0, 0.0))
        .with_ambient(ambient)
        .with_glossiness(10.0);
    let grey = Material::new()
        .with_diffuse(Color::splat(0.4))
        .with_specular(Color::splat(2.0))
        .with_ambient(ambient)
        .with_glossiness(10.0);
    let amber = Color::new(235.0, 155.0, 52.0) / 255.0;
    let amber_mirror = Material::new()
        .with_diffuse(amber * 0.6)
        .with_mirror(amber)
        .with_ambient(ambient);
    let blue = Material::new()
        .with_diffuse(Color::new(0.0, 0.0, 1.0))
        .with_specular(Color::new(0.0, 0.0, 0.8))
        .with_ambient(ambient)
        .with_glossiness(10.0);
    let dark = Material::new().with_ambient(ambient);

    let mut scene = Scene::new(skydome).with_ambient(ambient);

    scene.add(Sphere::new(Vec3::new(10.0, 0.0, 50.0), 3.0, amber_mirror));
    scene.add(Sphere::new(Vec3::new(-8.0, 0.0, 50.0), 3.0, dull_yellow));
    scene.add(Sphere::new(Vec3::new(0.0, 0.0, 67.0), 3.0, mirror));
    scene.add(Sphere::new(Vec3::new(0.0, 4.0, 58.0), 1.0, grey));

    let floor = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -3.0, 0.0), yellow);
    scene.add(floor.with_checker(dark));

    scene.add(Triangle::new(
        Vec3::new(-10.0, -3.0, 80.0),
        Vec3::new(10.0, -3.0, 80.0),
        Vec3::new(0.0, 20.0, 80.0),
        mirror,
    ));

    // Pyramid
    let a = Vec3::new(-3.0, -3.0, 60.0);
    let b = Vec3::new(3.0, -3.0, 60.0);
    let c = Vec3::new(3.0, -3.0, 56.0);
    let d = Vec3::new(-3.0, -3.0, 56.0);
    let top = Vec3::new(0.0, 3.0, 58.0);
    scene.add(Triangle::new(top, b, a, blue));
    scene.add(Triangle::new(b, top, c, blue));
    scene.add(Triangle::new(c, top, d, blue));
    scene.add(Triangle::new(d, top, a, blue));

    scene.add_light(Light::point(Vec3::new(15.0, 8.0, 35.0), Color::new(255.0, 0.0, 255.0)));
    scene.add_light(Light::point(Vec3::new(-15.0, 8.0, 65.0), Color::new(0.0, 255.0, 255.0)));
    scene.add_light(Light::spot(
        Vec3::new(0.0, 10.0, 45.0),
        Color::splat(510.0),
        Vec3::new(0.0, 1.2, -0.8),
        30.0,
    ));

    scene
}
