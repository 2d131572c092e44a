//! Building renderable objects from a scene description.

use std::path::Path;

use crate::{
    clamp_recursion_depth, Camera, Light, Material, Plane, Primitive, RenderConfig, RenderResult,
    Scene, Skydome, Sphere, Triangle,
};
use whitted_core::{
    load_scene_description, LightDesc, PrimitiveDesc, SceneDescription, SceneResult,
};

/// Everything needed to render a described scene.
#[derive(Debug, Clone)]
pub struct SceneSetup {
    pub camera: Camera,
    pub scene: Scene,
    pub config: RenderConfig,
}

impl SceneSetup {
    /// Read a scene file. Relative skydome paths resolve against the
    /// file's directory.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let desc = load_scene_description(path)?;
        Self::from_description(&desc, path.parent())
    }

    /// Build camera, scene and frame settings from a parsed description.
    ///
    /// The camera's aspect ratio matches the configured resolution.
    pub fn from_description(desc: &SceneDescription, base_dir: Option<&Path>) -> RenderResult<Self> {
        let mut camera = Camera::new(desc.camera.position, desc.camera.direction, desc.camera.fov)?;

        let skydome = Skydome::new(desc.skydome.load_image(base_dir)?, desc.skydome.exposure)?;
        let mut scene = Scene::new(skydome).with_ambient(desc.ambient);
        for primitive in &desc.primitives {
            scene.add(build_primitive(desc, primitive)?);
        }
        for light in &desc.lights {
            scene.add_light(build_light(light));
        }

        let config = RenderConfig {
            width: desc.render.width,
            height: desc.render.height,
            ssaa: desc.render.ssaa,
            recursion_depth: clamp_recursion_depth(desc.render.recursion_depth),
            shading: desc.render.shading,
            ..Default::default()
        };
        config.validate()?;
        camera.change_aspect_ratio(config.aspect_ratio())?;

        log::debug!(
            "Assembled scene: {} primitives, {} lights, sky {}x{}",
            scene.primitives().len(),
            scene.lights().len(),
            scene.skydome().image().width,
            scene.skydome().image().height
        );

        Ok(Self {
            camera,
            scene,
            config,
        })
    }
}

fn build_primitive(desc: &SceneDescription, primitive: &PrimitiveDesc) -> SceneResult<Primitive> {
    let material = |name: &str| desc.material(name).map(Material::from);

    Ok(match primitive {
        PrimitiveDesc::Sphere {
            center,
            radius,
            material: name,
        } => Sphere::new(*center, *radius, material(name)?).into(),
        PrimitiveDesc::Plane {
            normal,
            point,
            material: name,
            checker,
        } => {
            let plane = Plane::new(*normal, *point, material(name)?);
            match checker {
                Some(checker) => plane.with_checker(material(checker)?).into(),
                None => plane.into(),
            }
        }
        PrimitiveDesc::Triangle {
            a,
            b,
            c,
            material: name,
        } => Triangle::new(*a, *b, *c, material(name)?).into(),
    })
}

fn build_light(light: &LightDesc) -> Light {
    match light {
        LightDesc::Point { position, color } => Light::point(*position, *color),
        LightDesc::Spot {
            position,
            color,
            direction,
            angle,
        } => Light::spot(*position, *color, *direction, *angle),
    }
}
