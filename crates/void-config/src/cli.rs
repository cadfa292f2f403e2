//! Command-line arguments for the deep void demo.

use std::path::PathBuf;

use clap::Parser;
use void_scene::DisplayMode;

use crate::Config;

/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "deep-void", about = "Headless deep void background scene")]
pub struct CliArgs {
    /// Display mode (dark or light).
    #[arg(long)]
    pub mode: Option<DisplayMode>,

    /// Frames to run (0 = until interrupted).
    #[arg(long)]
    pub frames: Option<u64>,

    /// Frame pacing target.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Fixed star field seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mode) = args.mode {
            self.scene.mode = mode;
        }
        if let Some(frames) = args.frames {
            self.demo.frames = frames;
        }
        if let Some(fps) = args.fps {
            self.demo.target_fps = fps;
        }
        if let Some(seed) = args.seed {
            self.debug.star_seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
