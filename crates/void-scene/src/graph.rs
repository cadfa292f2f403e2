//! Scene graph fragment handed to the host renderer.
//!
//! The tree is built from typed nodes instead of markup:
//!
//! ```text
//! root
//! ├── ambient light
//! └── drift group (rotated about +Y over time)
//!     ├── star points
//!     └── horizon haze disc
//! ```
//!
//! Background color and fog are attached to the graph itself rather than to a node.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Quat, Vec3};

use crate::animator::RotationAccumulator;
use crate::palette::{Color, Fog, Palette};
use crate::point_field::PointBuffer;

/// Sprite size of each star in world units.
pub const POINT_SIZE: f32 = 0.012;
/// Radius of the horizon haze disc.
pub const HAZE_RADIUS: f32 = 80.0;
/// Segments around the haze disc.
pub const HAZE_SEGMENTS: u32 = 64;
/// Center of the haze disc, below and far ahead of the camera.
pub const HAZE_POSITION: Vec3 = Vec3::new(0.0, -12.0, -120.0);

/// Name of the group that carries the accumulated rotation.
pub const DRIFT_GROUP: &str = "drift";

/// How a transparent surface is composited over what is behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Standard alpha blending.
    #[default]
    Normal,
}

/// Translation and rotation of a node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Camera-facing sprite material for the star points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMaterial {
    pub color: Color,
    pub size: f32,
    /// Shrink sprites with distance from the camera.
    pub size_attenuation: bool,
    pub depth_write: bool,
    pub transparent: bool,
    pub opacity: f32,
    pub blending: BlendMode,
}

impl PointMaterial {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            color: palette.point_color,
            size: POINT_SIZE,
            size_attenuation: true,
            depth_write: false,
            transparent: true,
            opacity: palette.point_opacity,
            blending: BlendMode::Normal,
        }
    }
}

/// Unlit flat-color material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicMaterial {
    pub color: Color,
    pub transparent: bool,
    pub opacity: f32,
    pub blending: BlendMode,
}

/// A flat disc in the local XY plane, facing +Z, built as a triangle fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGeometry {
    pub radius: f32,
    pub segments: u32,
}

impl CircleGeometry {
    /// Center vertex followed by `segments + 1` rim vertices; the last rim vertex
    /// repeats the first to close the fan.
    pub fn positions(&self) -> Vec<Vec3> {
        let mut positions = Vec::with_capacity(self.segments as usize + 2);
        positions.push(Vec3::ZERO);
        for i in 0..=self.segments {
            let theta = i as f32 / self.segments as f32 * TAU;
            positions.push(Vec3::new(
                self.radius * theta.cos(),
                self.radius * theta.sin(),
                0.0,
            ));
        }
        positions
    }

    /// Fan triangle indices into [`positions`](Self::positions).
    pub fn indices(&self) -> Vec<u32> {
        (1..=self.segments).flat_map(|i| [0, i, i + 1]).collect()
    }
}

/// Point cloud primitive over the scene's star buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointsNode<'a> {
    pub positions: &'a PointBuffer,
    pub stride: usize,
    /// Always false: stars render regardless of camera drift.
    pub frustum_culled: bool,
    pub material: PointMaterial,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub transform: Transform,
    pub geometry: CircleGeometry,
    pub material: BasicMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupNode<'a> {
    pub name: &'static str,
    pub transform: Transform,
    pub children: Vec<SceneNode<'a>>,
}

impl<'a> GroupNode<'a> {
    fn walk(&self, depth: usize, f: &mut impl FnMut(&SceneNode<'a>, usize)) {
        for child in &self.children {
            f(child, depth);
            if let SceneNode::Group(group) = child {
                group.walk(depth + 1, f);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode<'a> {
    Group(GroupNode<'a>),
    Points(PointsNode<'a>),
    Mesh(MeshNode),
    AmbientLight(AmbientLight),
}

/// The complete scene fragment, borrowing the star buffer from its scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph<'a> {
    pub background: Color,
    pub fog: Fog,
    pub root: GroupNode<'a>,
}

impl<'a> SceneGraph<'a> {
    /// Compose the fragment for a palette, star buffer, and current group rotation.
    pub fn build(palette: &Palette, stars: &'a PointBuffer, rotation: RotationAccumulator) -> Self {
        let stars = SceneNode::Points(PointsNode {
            positions: stars,
            stride: PointBuffer::STRIDE,
            frustum_culled: false,
            material: PointMaterial::from_palette(palette),
        });

        let haze = SceneNode::Mesh(MeshNode {
            transform: Transform {
                translation: HAZE_POSITION,
                rotation: Quat::from_rotation_x(-FRAC_PI_2),
            },
            geometry: CircleGeometry {
                radius: HAZE_RADIUS,
                segments: HAZE_SEGMENTS,
            },
            material: BasicMaterial {
                color: palette.haze_color,
                transparent: true,
                opacity: palette.haze_opacity,
                blending: BlendMode::Normal,
            },
        });

        let drift = SceneNode::Group(GroupNode {
            name: DRIFT_GROUP,
            transform: Transform {
                translation: Vec3::ZERO,
                rotation: rotation.quat(),
            },
            children: vec![stars, haze],
        });

        let ambient = SceneNode::AmbientLight(AmbientLight {
            color: Color::from_hex_u32(0xffffff),
            intensity: palette.ambient_intensity,
        });

        Self {
            background: palette.background,
            fog: palette.fog,
            root: GroupNode {
                name: "root",
                transform: Transform::IDENTITY,
                children: vec![ambient, drift],
            },
        }
    }

    /// Depth-first walk over every node below the root. Depth 0 is a root child.
    pub fn visit(&self, mut f: impl FnMut(&SceneNode<'a>, usize)) {
        self.root.walk(0, &mut f);
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(|_, _| count += 1);
        count
    }

    /// The group the host should rotate each frame.
    pub fn drift_group(&self) -> Option<&GroupNode<'a>> {
        self.root.children.iter().find_map(|node| match node {
            SceneNode::Group(group) if group.name == DRIFT_GROUP => Some(group),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{DisplayMode, palette_for};
    use crate::point_field::StarfieldGenerator;

    fn stars() -> PointBuffer {
        StarfieldGenerator::new(32).with_seed(11).generate()
    }

    #[test]
    fn test_graph_shape() {
        let stars = stars();
        let graph = SceneGraph::build(&Palette::DARK, &stars, RotationAccumulator::default());

        let mut kinds = Vec::new();
        graph.visit(|node, depth| {
            let kind = match node {
                SceneNode::Group(_) => "group",
                SceneNode::Points(_) => "points",
                SceneNode::Mesh(_) => "mesh",
                SceneNode::AmbientLight(_) => "ambient",
            };
            kinds.push((kind, depth));
        });

        assert_eq!(
            kinds,
            vec![("ambient", 0), ("group", 0), ("points", 1), ("mesh", 1)]
        );
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_points_node_settings() {
        let stars = stars();
        let graph = SceneGraph::build(&Palette::LIGHT, &stars, RotationAccumulator::default());
        let drift = graph.drift_group().unwrap();
        let SceneNode::Points(points) = &drift.children[0] else {
            panic!("first drift child should be the star points");
        };

        assert!(std::ptr::eq(points.positions, &stars));
        assert_eq!(points.stride, 3);
        assert!(!points.frustum_culled);
        assert_eq!(points.material.color, Palette::LIGHT.point_color);
        assert_eq!(points.material.size, 0.012);
        assert!(points.material.size_attenuation);
        assert!(!points.material.depth_write);
        assert!(points.material.transparent);
        assert_eq!(points.material.opacity, 0.6);
        assert_eq!(points.material.blending, BlendMode::Normal);
    }

    #[test]
    fn test_haze_disc_lies_flat_at_horizon() {
        let stars = stars();
        let graph = SceneGraph::build(&Palette::DARK, &stars, RotationAccumulator::default());
        let drift = graph.drift_group().unwrap();
        let SceneNode::Mesh(haze) = &drift.children[1] else {
            panic!("second drift child should be the haze mesh");
        };

        assert_eq!(haze.geometry.radius, 80.0);
        assert_eq!(haze.geometry.segments, 64);
        assert_eq!(haze.transform.translation, HAZE_POSITION);
        assert_eq!(haze.material.color, Palette::DARK.haze_color);
        assert_eq!(haze.material.opacity, 0.12);
        assert_eq!(haze.material.blending, BlendMode::Normal);

        for v in haze.geometry.positions() {
            let world = haze.transform.transform_point(v);
            assert!((world.y + 12.0).abs() < 1e-3, "disc vertex at y = {}", world.y);
        }
    }

    #[test]
    fn test_circle_geometry_fan() {
        let disc = CircleGeometry {
            radius: 2.0,
            segments: 8,
        };
        let positions = disc.positions();
        assert_eq!(positions.len(), 10);
        for rim in &positions[1..] {
            assert!((rim.length() - 2.0).abs() < 1e-5);
        }
        assert!((positions[1] - positions[9]).length() < 1e-5);

        let indices = disc.indices();
        assert_eq!(indices.len(), 8 * 3);
        assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
    }

    #[test]
    fn test_transform_matrix_matches_transform_point() {
        let transform = Transform {
            translation: HAZE_POSITION,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
        };
        let p = Vec3::new(10.0, 5.0, 0.0);
        let via_matrix = transform.to_matrix().transform_point3(p);
        assert!((via_matrix - transform.transform_point(p)).length() < 1e-4);
    }

    #[test]
    fn test_drift_group_carries_rotation() {
        let stars = stars();
        let mut rotation = RotationAccumulator::default();
        rotation.advance(30.0);
        let graph = SceneGraph::build(&Palette::DARK, &stars, rotation);
        let drift = graph.drift_group().unwrap();
        assert!(
            drift
                .transform
                .rotation
                .abs_diff_eq(Quat::from_rotation_y(0.3), 1e-6)
        );
    }

    #[test]
    fn test_background_fog_and_ambient_follow_mode() {
        let stars = stars();
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            let palette = palette_for(mode);
            let graph = SceneGraph::build(&palette, &stars, RotationAccumulator::default());
            assert_eq!(graph.background, palette.background);
            assert_eq!(graph.fog, palette.fog);
            let SceneNode::AmbientLight(light) = &graph.root.children[0] else {
                panic!("first root child should be the ambient light");
            };
            assert_eq!(light.intensity, palette.ambient_intensity);
        }
    }
}
