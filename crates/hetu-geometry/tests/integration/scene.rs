//! Integration tests for the frame-driven scene

use glam::Vec3;
use hetu_geometry::animation::HeTuPhase;
use hetu_geometry::{AnimationSettings, Diagram, DiagramError, Intent, Layers, Mode, Scene};
use pretty_assertions::assert_eq;

const FRAME: f32 = 1.0 / 60.0;

fn scene() -> Scene {
    let _ = env_logger::builder().is_test(true).try_init();
    Scene::new(AnimationSettings::default()).unwrap()
}

fn run(scene: &mut Scene, seconds: f32, dt: f32) {
    let frames = (seconds / dt).round() as usize;
    for _ in 0..frames {
        scene.update(dt);
    }
}

#[test]
fn test_select_galaxy_runs_without_input() {
    let mut scene = scene();
    scene.apply(Intent::SelectMode(Mode::Galaxy)).unwrap();
    assert_eq!(scene.hetu().phase(), HeTuPhase::Morphing);

    run(&mut scene, 0.5, FRAME);
    assert_eq!(scene.hetu().phase(), HeTuPhase::Morphing);

    run(&mut scene, 0.6, FRAME);
    assert_eq!(scene.hetu().phase(), HeTuPhase::Running);
    assert_eq!(scene.frame().phase, "RUNNING");
}

#[test]
fn test_reset_from_every_active_state_reaches_static() {
    let setups: [&[Intent]; 4] = [
        &[Intent::SelectMode(Mode::Galaxy)],
        &[Intent::SelectMode(Mode::Galaxy), Intent::ToggleRun],
        &[Intent::SelectMode(Mode::Helix)],
        &[Intent::SelectMode(Mode::Helix), Intent::ToggleRun],
    ];
    for intents in setups {
        let mut scene = scene();
        scene.apply(intents[0]).unwrap();
        run(&mut scene, 1.5, FRAME);
        for &intent in &intents[1..] {
            scene.apply(intent).unwrap();
        }

        scene.apply(Intent::Reset).unwrap();
        assert_eq!(scene.hetu().phase(), HeTuPhase::Returning);
        run(&mut scene, 1.1, FRAME);
        assert_eq!(scene.hetu().phase(), HeTuPhase::Static, "after {intents:?}");
    }
}

#[test]
fn test_stale_morph_deadline_cannot_fire() {
    let mut scene = scene();
    scene.apply(Intent::SelectMode(Mode::Galaxy)).unwrap();
    run(&mut scene, 0.5, FRAME);
    // Reset while morphing; the old deadline at 1.0 s must not promote to RUNNING
    scene.apply(Intent::Reset).unwrap();
    run(&mut scene, 0.7, FRAME);
    assert_eq!(scene.hetu().phase(), HeTuPhase::Returning);
    run(&mut scene, 0.4, FRAME);
    assert_eq!(scene.hetu().phase(), HeTuPhase::Static);
}

#[test]
fn test_cross_over_is_continuous() {
    let dt = 1.0 / 600.0;
    let mut scene = scene();
    scene.apply(Intent::SelectMode(Mode::Galaxy)).unwrap();
    run(&mut scene, 3.0, dt);

    scene.apply(Intent::SelectMode(Mode::Helix)).unwrap();
    let mut previous: Vec<Vec3> = scene.positions().to_vec();
    let mut largest = 0.0f32;
    for _ in 0..1200 {
        scene.update(dt);
        for (a, b) in previous.iter().zip(scene.positions()) {
            largest = largest.max(a.distance(*b));
        }
        previous = scene.positions().to_vec();
    }
    assert!(largest < 0.25, "largest per-step jump {largest}");
    assert_eq!(scene.hetu().phase(), HeTuPhase::HelixRunning);
    assert!(scene.hetu().galaxy_blend() < 0.01);
    assert!(scene.hetu().helix_blend() > 0.99);
}

#[test]
fn test_frame_lists_active_diagram() {
    let mut scene = scene();
    let frame = scene.frame();
    assert_eq!(frame.diagram, Diagram::HeTu);
    assert_eq!(frame.points.len(), 55);
    let names: Vec<&str> = frame.paths.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["yang", "yin"]);
    assert_eq!(frame.layers, Layers::all());
    assert_eq!(frame.flow_marker, None);

    scene.apply("diagram:luoshu".parse().unwrap()).unwrap();
    let frame = scene.frame();
    assert_eq!(frame.diagram, Diagram::LuoShu);
    assert_eq!(frame.points.len(), 45);
    assert_eq!(frame.paths[0].name, "circuit");
}

#[test]
fn test_luoshu_projection_and_rotation() {
    let mut scene = scene();
    scene.apply(Intent::SelectDiagram(Diagram::LuoShu)).unwrap();
    scene.apply(Intent::SelectMode(Mode::Projection)).unwrap();
    scene.apply(Intent::ToggleRotate).unwrap();
    run(&mut scene, 5.0, FRAME);

    let frame = scene.frame();
    assert_eq!(frame.phase, "PROJECTION");
    assert!(frame.rotating);
    assert_eq!(frame.blends["projection"], 1.0);
    for point in &frame.points {
        assert!(point.position.z.abs() < 1e-5);
    }

    // Reset keeps the rotation until the sphere has faded back to the plane
    scene.apply(Intent::Reset).unwrap();
    scene.update(FRAME);
    assert!(scene.luoshu().rotation_clock() > 0.0);
    run(&mut scene, 5.0, FRAME);
    assert_eq!(scene.luoshu().rotation_clock(), 0.0);
    let catalog = scene.luoshu().catalog();
    for (position, point) in scene.positions().iter().zip(catalog.points()) {
        assert_eq!(*position, point.plane_position);
    }
}

#[test]
fn test_invalid_settings_are_rejected() {
    let settings = AnimationSettings {
        circuit_order: vec![3],
        ..Default::default()
    };
    assert!(matches!(
        Scene::new(settings),
        Err(DiagramError::InvalidSettings(_))
    ));
}
