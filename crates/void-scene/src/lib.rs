//! Deep void background scene: a sparse distant starfield, a faint horizon haze,
//! and a slowly drifting camera composited over a mode-dependent background.
//!
//! The host renderer owns the GPU side. This crate generates the star buffer once,
//! describes the scene graph fragment, and advances camera drift and group
//! rotation once per frame.

pub mod animator;
pub mod camera;
mod error;
pub mod graph;
pub mod palette;
pub mod point_field;
pub mod scene;

pub use animator::{LookAtCamera, Pointer, RotationAccumulator, animate_frame};
pub use camera::Camera;
pub use error::SceneError;
pub use graph::{
    AmbientLight, BasicMaterial, BlendMode, CircleGeometry, GroupNode, MeshNode, PointMaterial,
    PointsNode, SceneGraph, SceneNode, Transform,
};
pub use palette::{Color, DisplayMode, Fog, Palette, palette_for};
pub use point_field::{
    DEFAULT_STAR_COUNT, PointBuffer, PointCount, PointFieldCache, StarfieldGenerator,
};
pub use scene::VoidScene;
