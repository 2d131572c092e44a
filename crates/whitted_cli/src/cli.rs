use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use whitted_renderer::CameraMotion;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Render a scene with a Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON). Renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Supersamples per pixel along each axis
    #[arg(long)]
    pub ssaa: Option<u32>,

    /// Mirror recursion depth (clamped to 0..=9)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Horizontal field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Flat diffuse preview instead of full shading
    #[arg(long)]
    pub no_shading: bool,

    /// Record debug ray segments along the center row
    #[arg(long)]
    pub debug_rays: bool,

    /// Environment image replacing the scene's skydome
    #[arg(long)]
    pub skydome: Option<PathBuf>,

    /// Divisor applied to skydome texels
    #[arg(long)]
    pub exposure: Option<f32>,

    /// Camera move to the right before rendering
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub right: f32,

    /// Camera move upward before rendering
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub up: f32,

    /// Camera move forward before rendering
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub forward: f32,

    /// Camera pitch in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pitch: f32,

    /// Camera yaw in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub yaw: f32,

    /// Camera roll in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub roll: f32,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn camera_motion(&self) -> CameraMotion {
        CameraMotion {
            right: self.right,
            up: self.up,
            forward: self.forward,
            pitch: self.pitch,
            yaw: self.yaw,
            roll: self.roll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["whitted"]);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert!(args.width.is_none());
        assert!(!args.no_shading);
        assert!(args.camera_motion().is_identity());
        assert!(matches!(args.log_level, LogLevel::Info));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "whitted",
            "scenes/demo.json",
            "--width",
            "320",
            "--depth",
            "4",
            "--yaw",
            "-0.25",
            "--no-shading",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.scene, Some(PathBuf::from("scenes/demo.json")));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.depth, Some(4));
        assert_eq!(args.camera_motion().yaw, -0.25);
        assert!(args.no_shading);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
