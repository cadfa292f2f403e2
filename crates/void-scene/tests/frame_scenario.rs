//! End-to-end frame scenarios driving a scene with the bundled camera.

use glam::Vec3;
use void_scene::animator::{LOOK_TARGET, REST_DEPTH};
use void_scene::{Camera, DisplayMode, Pointer, SceneNode, VoidScene};

#[test]
fn test_first_frame_from_origin() {
    let mut scene = VoidScene::new(DisplayMode::Dark);
    let mut camera = Camera::default();

    scene.update(&mut camera, Pointer::new(0.5, -0.5), 0.016);

    let p = camera.position;
    assert!((p.x - 0.009).abs() < 1e-6, "x = {}", p.x);
    assert!((p.y + 0.005).abs() < 1e-6, "y = {}", p.y);
    assert!((p.z - 0.17).abs() < 1e-6, "z = {}", p.z);
    assert!((scene.rotation().radians() - 0.00016).abs() < 1e-9);

    let to_target = (LOOK_TARGET - p).normalize();
    assert!((camera.forward() - to_target).length() < 1e-5);
}

#[test]
fn test_centered_pointer_settles_camera_at_rest() {
    let mut scene = VoidScene::new(DisplayMode::Light);
    let mut camera = Camera {
        position: Vec3::new(-1.5, 2.0, 0.0),
        ..Camera::default()
    };

    for _ in 0..600 {
        scene.update(&mut camera, Pointer::CENTER, 1.0 / 60.0);
    }

    assert!(camera.position.x.abs() < 0.01);
    assert!(camera.position.y.abs() < 0.01);
    assert!((camera.position.z - REST_DEPTH).abs() < 0.01);
    assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-3);
}

#[test]
fn test_held_pointer_offsets_camera() {
    let mut scene = VoidScene::new(DisplayMode::Dark);
    let mut camera = Camera::default();

    for _ in 0..600 {
        scene.update(&mut camera, Pointer::new(1.0, 1.0), 1.0 / 60.0);
    }

    assert!((camera.position.x - 0.45).abs() < 0.01);
    assert!((camera.position.y - 0.25).abs() < 0.01);
}

#[test]
fn test_graph_after_frames_reflects_rotation() {
    let mut scene = VoidScene::new(DisplayMode::Dark);
    let mut camera = Camera::default();
    for _ in 0..60 {
        scene.update(&mut camera, Pointer::CENTER, 1.0 / 60.0);
    }

    let expected = scene.rotation().quat();
    let graph = scene.graph();
    let drift = graph.drift_group().expect("drift group present");
    assert_eq!(drift.transform.rotation, expected);
    assert!(matches!(drift.children[0], SceneNode::Points(_)));
    assert_eq!(graph.node_count(), 4);
}
