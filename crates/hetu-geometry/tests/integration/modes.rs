//! Integration tests for the mode generators and the blend engine

use glam::Vec3;
use hetu_geometry::animation::{blend_position, compose_position, slerp_on_sphere};
use hetu_geometry::catalog::SPHERE_RADIUS;
use hetu_geometry::modes::sphere::anchor_position;
use hetu_geometry::modes::{
    CircuitPath, PositionKind, Spin, Vertical, generate_galaxy_map, generate_helix_map,
};
use hetu_geometry::sequence::{EVEN_SEQUENCE, ODD_SEQUENCE};
use hetu_geometry::{generate_hetu_catalog, generate_luoshu_catalog, sort_by_group_sequence};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_every_point_is_mapped() {
    let catalog = generate_hetu_catalog();
    let galaxy = generate_galaxy_map(&catalog).unwrap();
    let helix = generate_helix_map(&catalog).unwrap();
    assert_eq!(galaxy.len(), catalog.len());
    assert_eq!(helix.len(), catalog.len());
}

#[test_case(&ODD_SEQUENCE; "odd arm")]
#[test_case(&EVEN_SEQUENCE; "even arm")]
fn test_galaxy_radius_grows_along_arm(sequence: &[u8]) {
    let catalog = generate_hetu_catalog();
    let map = generate_galaxy_map(&catalog).unwrap();
    let order = sort_by_group_sequence(catalog.points(), sequence).unwrap();
    let radii: Vec<f32> = order.iter().map(|&i| map[i].radius).collect();
    for pair in radii.windows(2) {
        assert!(pair[1] >= pair[0], "radius fell from {} to {}", pair[0], pair[1]);
    }
    assert!(order.iter().all(|&i| map[i].kind == PositionKind::Arm));
}

#[test]
fn test_galaxy_counter_winds_while_helix_co_winds() {
    let catalog = generate_hetu_catalog();
    let galaxy = generate_galaxy_map(&catalog).unwrap();
    let helix = generate_helix_map(&catalog).unwrap();

    for sequence in [ODD_SEQUENCE, EVEN_SEQUENCE] {
        let order = sort_by_group_sequence(catalog.points(), &sequence).unwrap();
        for pair in order.windows(2) {
            let (a, b) = (galaxy[pair[0]], galaxy[pair[1]]);
            assert_eq!(a.spin, Spin::Ccw);
            assert!(b.start_angle < a.start_angle);

            let (a, b) = (helix[pair[0]], helix[pair[1]]);
            assert_eq!(a.spin, Spin::Ccw);
            assert!(b.start_angle > a.start_angle);
        }
    }
}

#[test]
fn test_helix_strands_are_centred() {
    let catalog = generate_hetu_catalog();
    let helix = generate_helix_map(&catalog).unwrap();
    for sequence in [ODD_SEQUENCE, EVEN_SEQUENCE] {
        let order = sort_by_group_sequence(catalog.points(), &sequence).unwrap();
        let height = |index: usize| match helix[index].vertical {
            Vertical::Fixed(h) => h,
            Vertical::Wobble { .. } => panic!("strand points have fixed heights"),
        };
        let first = height(order[0]);
        let last = height(order[order.len() - 1]);
        assert!((first + last).abs() < 1e-5);
    }
}

#[test]
fn test_core_groups_stay_put_in_helix() {
    let catalog = generate_hetu_catalog();
    let helix = generate_helix_map(&catalog).unwrap();
    for value in [5, 10] {
        for (index, point) in catalog.group(value) {
            let config = helix[index];
            assert_eq!(config.kind, PositionKind::Core);
            let p = config.evaluate(3.0);
            assert!((p - point.position).length() < 1e-4);
        }
    }
}

#[test]
fn test_blend_identity_law() {
    let catalog = generate_hetu_catalog();
    let galaxy = generate_galaxy_map(&catalog).unwrap();
    let helix = generate_helix_map(&catalog).unwrap();
    for t in [0.0, 0.7, 12.5, 300.0] {
        for (index, point) in catalog.points().iter().enumerate() {
            let modes = [(&galaxy[index], 0.0), (&helix[index], 0.0)];
            assert_eq!(compose_position(point.position, &modes, t), point.position);

            let full = compose_position(point.position, &[(&galaxy[index], 1.0)], t);
            assert!((full - galaxy[index].evaluate(t)).length() < 1e-4);
        }
    }
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(blend_position(p, Vec3::ZERO, 0.0), p);
}

#[test]
fn test_slerp_same_anchor() {
    for value in [1, 2, 3, 4, 6, 7, 8, 9] {
        let anchor = anchor_position(value).unwrap();
        for t in [0.0, 0.25, 0.5, 1.0] {
            let p = slerp_on_sphere(anchor, anchor, SPHERE_RADIUS, t);
            assert!((p.length() - anchor.length()).abs() < 1e-4);
            assert!((p - anchor).length() < 1e-4);
        }
    }
}

#[test]
fn test_custom_circuit() {
    let catalog = generate_luoshu_catalog();
    let path = CircuitPath::build(&catalog, &[9, 1, 9], 12).unwrap();
    assert_eq!(path.leg_count(), 2);
    assert_eq!(path.samples().len(), 25);
    // 9 and 1 are antipodal, so those legs fall back to a straight chord
    for sample in path.samples() {
        assert!(sample.sphere.is_finite());
    }
}
