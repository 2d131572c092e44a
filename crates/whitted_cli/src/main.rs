mod cli;
mod logger;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use whitted_core::load_hdr;
use whitted_math::Vec3;
use whitted_renderer::{demo, Renderer, SceneSetup, Skydome};

use crate::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    let SceneSetup {
        mut camera,
        mut scene,
        mut config,
    } = match &args.scene {
        Some(path) => SceneSetup::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            SceneSetup {
                camera: demo::demo_camera().context("Demo camera")?,
                // Misses pick up the sky once per light
                scene: demo::demo_scene(Skydome::solid(Vec3::new(0.15, 0.2, 0.3))),
                config: Default::default(),
            }
        }
    };

    if let Some(path) = &args.skydome {
        let image = load_hdr(path)
            .with_context(|| format!("Failed to load skydome {}", path.display()))?;
        let exposure = args.exposure.unwrap_or(demo::DEMO_SKY_EXPOSURE);
        scene.set_skydome(Skydome::new(image, exposure).context("Invalid sky exposure")?);
    } else if let Some(exposure) = args.exposure {
        let image = scene.skydome().image().clone();
        scene.set_skydome(Skydome::new(image, exposure).context("Invalid sky exposure")?);
    }

    if let Some(fov) = args.fov {
        camera.set_fov(fov).context("Invalid field of view")?;
    }
    let motion = args.camera_motion();
    if !motion.is_identity() {
        camera.move_camera(motion).context("Camera move failed")?;
    }

    config.width = args.width.unwrap_or(config.width);
    config.height = args.height.unwrap_or(config.height);
    config.ssaa = args.ssaa.unwrap_or(config.ssaa);
    config.shading = config.shading && !args.no_shading;
    config.debug_rays = args.debug_rays;

    let mut renderer = Renderer::new(camera, scene, config).context("Invalid render settings")?;
    if let Some(depth) = args.depth {
        renderer.set_recursion_depth(depth);
    }

    let cfg = renderer.config();
    log::info!(
        "Rendering {}x{} (ssaa {}, depth {}, shading {})",
        cfg.width,
        cfg.height,
        cfg.ssaa,
        cfg.recursion_depth,
        if cfg.shading { "on" } else { "off" }
    );

    let start = Instant::now();
    let frame = renderer.render();
    log::info!("Frame done in {:.2}s", start.elapsed().as_secs_f32());

    if !frame.debug_rays.is_empty() {
        log::info!("Recorded {} debug ray segments", frame.debug_rays.len());
    }

    frame
        .to_image()
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
