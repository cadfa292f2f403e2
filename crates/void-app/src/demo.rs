//! Headless run loop: builds the scene from config and animates it against a
//! synthetic pointer, logging camera state as it drifts.

use std::f32::consts::TAU;
use std::path::PathBuf;

use glam::Vec3;
use tracing::{debug, info, warn};
use void_config::Config;
use void_scene::{Camera, DisplayMode, Pointer, VoidScene};

use crate::frame_clock::FrameClock;

/// A pointer tracing a Lissajous figure, standing in for mouse input.
#[derive(Clone, Copy, Debug)]
pub struct PointerPath {
    orbit_hz: f32,
}

impl PointerPath {
    pub fn new(orbit_hz: f32) -> Self {
        Self { orbit_hz }
    }

    /// Pointer position `seconds` into the run. Always within `[-1, 1]`.
    pub fn sample(&self, seconds: f64) -> Pointer {
        let phase = (seconds as f32) * self.orbit_hz * TAU;
        Pointer::new(phase.sin(), 0.6 * (phase * 1.5).cos())
    }
}

/// Polls `config.ron` for a display mode change made while the demo runs.
///
/// Compares against the file contents last read rather than the effective
/// config, so a CLI override holds until the file itself changes the mode.
#[derive(Debug)]
pub struct ConfigWatcher {
    config_dir: PathBuf,
    on_disk: Config,
}

impl ConfigWatcher {
    /// Watch `config_dir`, whose `config.ron` currently holds `on_disk`.
    pub fn new(config_dir: impl Into<PathBuf>, on_disk: Config) -> Self {
        Self {
            config_dir: config_dir.into(),
            on_disk,
        }
    }

    /// Re-read the file. Returns the new mode if the file's mode changed.
    ///
    /// A missing or invalid file is logged and leaves the last good contents in place.
    pub fn poll(&mut self) -> Option<DisplayMode> {
        match self.on_disk.reload(&self.config_dir) {
            Ok(Some(config)) => {
                let changed = config.scene.mode != self.on_disk.scene.mode;
                let mode = config.scene.mode;
                self.on_disk = config;
                changed.then_some(mode)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("config reload failed: {e}");
                None
            }
        }
    }
}

/// Final state of a finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub frames: u64,
    pub mode: DisplayMode,
    pub elapsed: f64,
    pub camera_position: Vec3,
    pub rotation: f32,
}

/// Create the scene described by `config`.
pub fn build_scene(config: &Config) -> VoidScene {
    match config.debug.star_seed {
        Some(seed) => VoidScene::with_seed(config.scene.mode, seed),
        None => VoidScene::new(config.scene.mode),
    }
}

/// Run the demo until `config.demo.frames` frames have rendered (forever when 0).
///
/// With a watcher, the config file is polled every `demo.reload_every` frames
/// and a changed display mode is applied to the running scene.
pub fn run(config: &Config, mut watcher: Option<ConfigWatcher>) -> RunSummary {
    let demo = &config.demo;
    let mut scene = build_scene(config);

    {
        let graph = scene.graph();
        info!(
            mode = %config.scene.mode,
            nodes = graph.node_count(),
            background = %graph.background,
            fog_near = graph.fog.near,
            fog_far = graph.fog.far,
            "scene graph built"
        );
    }

    let mut camera = Camera::default();
    let path = PointerPath::new(demo.pointer_orbit_hz);
    let mut clock = FrameClock::new();

    while demo.frames == 0 || clock.frame_count() < demo.frames {
        let dt = clock.tick();
        let pointer = path.sample(clock.elapsed());
        scene.update(&mut camera, pointer, dt as f32);

        let frame = clock.frame_count();
        if let Some(watcher) = watcher.as_mut()
            && demo.reload_every != 0
            && frame % demo.reload_every == 0
            && let Some(mode) = watcher.poll()
        {
            info!(frame, %mode, "display mode changed on disk");
            scene.set_mode(mode);
        }

        if demo.report_every != 0 && frame % demo.report_every == 0 {
            let p = camera.position;
            info!(
                frame,
                x = p.x,
                y = p.y,
                z = p.z,
                rotation = scene.rotation().radians(),
                "camera drift"
            );
        } else {
            debug!(frame, dt, pointer_x = pointer.x, pointer_y = pointer.y, "frame");
        }

        std::thread::sleep(clock.remaining_budget(demo.target_fps));
    }

    let summary = RunSummary {
        frames: clock.frame_count(),
        mode: scene.mode(),
        elapsed: clock.elapsed(),
        camera_position: camera.position,
        rotation: scene.rotation().radians(),
    };
    info!(
        frames = summary.frames,
        elapsed = summary.elapsed,
        stars = scene.stars().point_count(),
        "run finished"
    );
    summary
}
