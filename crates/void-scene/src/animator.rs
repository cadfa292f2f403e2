//! Per-frame camera drift toward the pointer and slow rotation of the star group.
//!
//! The follow rates are per-frame interpolation factors, not scaled by `dt`, so
//! drift speed follows the frame cadence. Only the group rotation uses `dt`.

use glam::{Quat, Vec2, Vec3};

/// Horizontal camera offset at full pointer deflection.
pub const POINTER_GAIN_X: f32 = 0.45;
/// Vertical camera offset at full pointer deflection.
pub const POINTER_GAIN_Y: f32 = 0.25;
/// Depth the camera settles at.
pub const REST_DEPTH: f32 = 8.5;
/// Point the camera keeps centered, ahead of its resting depth.
pub const LOOK_TARGET: Vec3 = Vec3::new(0.0, 0.0, -22.0);
/// Per-frame follow rate for the X and Y axes.
pub const XY_FOLLOW: f32 = 0.04;
/// Per-frame follow rate for the Z axis.
pub const Z_FOLLOW: f32 = 0.02;
/// Group rotation speed in radians per second.
pub const ROTATION_SPEED: f32 = 0.01;

/// Host camera seam: the animator reads and writes the position and re-aims it.
pub trait LookAtCamera {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Orient the camera toward `target` in world space.
    fn look_at(&mut self, target: Vec3);
}

/// Pointer position in normalized device coordinates, `[-1, 1]` on both axes with +Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a cursor position in window pixels (origin top-left, +Y down).
    ///
    /// A zero-sized window maps to the center.
    pub fn from_window(cursor: Vec2, window_size: Vec2) -> Self {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return Self::CENTER;
        }
        Self {
            x: cursor.x / window_size.x * 2.0 - 1.0,
            y: -(cursor.y / window_size.y) * 2.0 + 1.0,
        }
    }
}

/// Unbounded rotation of the star group about +Y, in radians.
///
/// Never wrapped; consumers build rotations from it with periodic functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationAccumulator(f32);

impl RotationAccumulator {
    pub fn radians(self) -> f32 {
        self.0
    }

    /// Advance by `dt` seconds at [`ROTATION_SPEED`].
    pub fn advance(&mut self, dt: f32) {
        self.0 += dt * ROTATION_SPEED;
    }

    /// The group rotation as a quaternion about +Y.
    pub fn quat(self) -> Quat {
        Quat::from_rotation_y(self.0)
    }
}

/// Linear interpolation: `t = 0.0` returns `a`, `t = 1.0` returns `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Run one frame of the animation.
///
/// Eases the camera toward the pointer-driven target, re-aims it at
/// [`LOOK_TARGET`], and advances the group rotation by `dt * ROTATION_SPEED`.
/// Pointer values outside `[-1, 1]` are not clamped.
pub fn animate_frame<C: LookAtCamera + ?Sized>(
    camera: &mut C,
    pointer: Pointer,
    dt: f32,
    rotation: &mut RotationAccumulator,
) {
    debug_assert!(dt >= 0.0, "frame delta must be non-negative, got {dt}");

    let current = camera.position();
    camera.set_position(Vec3::new(
        lerp(current.x, pointer.x * POINTER_GAIN_X, XY_FOLLOW),
        lerp(current.y, pointer.y * POINTER_GAIN_Y, XY_FOLLOW),
        lerp(current.z, REST_DEPTH, Z_FOLLOW),
    ));
    camera.look_at(LOOK_TARGET);

    rotation.advance(dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records look-at calls so tests can check the animator re-aims every frame.
    #[derive(Default)]
    struct RecordingCamera {
        position: Vec3,
        looked_at: Vec<Vec3>,
    }

    impl LookAtCamera for RecordingCamera {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }

        fn look_at(&mut self, target: Vec3) {
            self.looked_at.push(target);
        }
    }

    #[test]
    fn test_single_frame_matches_reference_values() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        animate_frame(&mut camera, Pointer::new(0.5, -0.5), 0.016, &mut rotation);

        assert!((camera.position.x - 0.009).abs() < 1e-6, "x = {}", camera.position.x);
        assert!((camera.position.y + 0.005).abs() < 1e-6, "y = {}", camera.position.y);
        assert!((camera.position.z - 0.17).abs() < 1e-6, "z = {}", camera.position.z);
        assert!((rotation.radians() - 0.00016).abs() < 1e-9);
    }

    #[test]
    fn test_camera_aims_at_fixed_target_every_frame() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        for _ in 0..3 {
            animate_frame(&mut camera, Pointer::new(1.0, 1.0), 0.016, &mut rotation);
        }
        assert_eq!(camera.looked_at, vec![LOOK_TARGET; 3]);
    }

    #[test]
    fn test_camera_converges_to_rest_monotonically() {
        let mut camera = RecordingCamera {
            position: Vec3::new(3.0, -2.0, 40.0),
            ..Default::default()
        };
        let mut rotation = RotationAccumulator::default();
        let mut prev = camera.position;
        let mut converged_at = None;

        for frame in 0..2000 {
            animate_frame(&mut camera, Pointer::CENTER, 1.0 / 60.0, &mut rotation);
            let p = camera.position;
            assert!(p.x.abs() <= prev.x.abs(), "x moved away from 0 at frame {frame}");
            assert!(p.y.abs() <= prev.y.abs(), "y moved away from 0 at frame {frame}");
            assert!(
                (p.z - REST_DEPTH).abs() <= (prev.z - REST_DEPTH).abs(),
                "z moved away from rest at frame {frame}"
            );
            prev = p;

            if converged_at.is_none()
                && p.x.abs() < 0.01
                && p.y.abs() < 0.01
                && (p.z - REST_DEPTH).abs() < 0.01
            {
                converged_at = Some(frame);
            }
        }

        let frame = converged_at.expect("camera never settled");
        assert!(frame < 500, "settled only after {frame} frames");
    }

    #[test]
    fn test_xy_follow_faster_than_z() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        animate_frame(&mut camera, Pointer::new(1.0, 1.0), 0.0, &mut rotation);
        let x_progress = camera.position.x / POINTER_GAIN_X;
        let z_progress = camera.position.z / REST_DEPTH;
        assert!(x_progress > z_progress);
    }

    #[test]
    fn test_out_of_range_pointer_is_not_clamped() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        animate_frame(&mut camera, Pointer::new(4.0, 0.0), 0.0, &mut rotation);
        assert!((camera.position.x - 4.0 * POINTER_GAIN_X * XY_FOLLOW).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_advances_by_dt_times_speed() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        for dt in [0.016_f32, 0.033, 0.5, 2.0] {
            let before = rotation.radians();
            animate_frame(&mut camera, Pointer::CENTER, dt, &mut rotation);
            assert_eq!(rotation.radians(), before + dt * ROTATION_SPEED);
        }
    }

    #[test]
    fn test_zero_dt_leaves_rotation_unchanged() {
        let mut camera = RecordingCamera::default();
        let mut rotation = RotationAccumulator::default();
        rotation.advance(1.0);
        let before = rotation;
        animate_frame(&mut camera, Pointer::new(0.2, 0.2), 0.0, &mut rotation);
        assert_eq!(rotation, before);
    }

    #[test]
    fn test_rotation_is_not_wrapped() {
        let mut rotation = RotationAccumulator::default();
        rotation.advance(1000.0);
        assert!(rotation.radians() > std::f32::consts::TAU);
        let q = rotation.quat();
        let wrapped = Quat::from_rotation_y(rotation.radians() % std::f32::consts::TAU);
        assert!(q.dot(wrapped).abs() > 0.9999);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_pointer_from_window_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(Pointer::from_window(Vec2::ZERO, size), Pointer::new(-1.0, 1.0));
        assert_eq!(Pointer::from_window(size, size), Pointer::new(1.0, -1.0));
        assert_eq!(Pointer::from_window(size / 2.0, size), Pointer::CENTER);
        assert_eq!(Pointer::from_window(Vec2::ONE, Vec2::ZERO), Pointer::CENTER);
    }
}
