//! The scene instance: owns the star buffer and the group rotation, and ties the
//! palette, animator, and graph together for the host's frame loop.

use crate::animator::{LookAtCamera, Pointer, RotationAccumulator, animate_frame};
use crate::graph::SceneGraph;
use crate::palette::{DisplayMode, Palette, palette_for};
use crate::point_field::{DEFAULT_STAR_COUNT, PointBuffer, PointFieldCache};

/// One live deep-void background.
///
/// Stars are generated once at construction. Switching the display mode or
/// rebuilding the graph reuses them; only a new instance produces a new field
/// and a zeroed rotation.
#[derive(Debug)]
pub struct VoidScene {
    mode: DisplayMode,
    stars: PointFieldCache,
    rotation: RotationAccumulator,
}

impl VoidScene {
    pub fn new(mode: DisplayMode) -> Self {
        Self::build(mode, None)
    }

    /// Like [`new`](Self::new), with a reproducible star field.
    pub fn with_seed(mode: DisplayMode, seed: u64) -> Self {
        Self::build(mode, Some(seed))
    }

    fn build(mode: DisplayMode, seed: Option<u64>) -> Self {
        log::info!("creating {mode} void scene with {DEFAULT_STAR_COUNT} stars");
        Self {
            mode,
            stars: PointFieldCache::new(DEFAULT_STAR_COUNT, seed),
            rotation: RotationAccumulator::default(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switch palettes. The star field is kept.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            log::debug!("display mode {} -> {mode}", self.mode);
            self.mode = mode;
        }
    }

    pub fn palette(&self) -> Palette {
        palette_for(self.mode)
    }

    pub fn stars(&self) -> &PointBuffer {
        self.stars.buffer()
    }

    pub fn rotation(&self) -> RotationAccumulator {
        self.rotation
    }

    /// Advance one frame: drift the camera and rotate the star group.
    pub fn update<C: LookAtCamera + ?Sized>(&mut self, camera: &mut C, pointer: Pointer, dt: f32) {
        animate_frame(camera, pointer, dt, &mut self.rotation);
    }

    /// The graph fragment for the current mode and rotation.
    pub fn graph(&mut self) -> SceneGraph<'_> {
        let palette = self.palette();
        let rotation = self.rotation;
        let stars = self.stars.get_or_generate(DEFAULT_STAR_COUNT);
        SceneGraph::build(&palette, stars, rotation)
    }

    /// How many times this instance has generated stars. Stays at 1.
    pub fn star_generations(&self) -> u32 {
        self.stars.generation_count()
    }
}
