//! Integration tests for the point catalogs

use glam::Vec3;
use hetu_geometry::catalog::{CUBE_HALF, DOT_GAP, SPHERE_RADIUS};
use hetu_geometry::types::{Face, Polarity, Zone};
use hetu_geometry::{GroupedPoint, generate_hetu_catalog, generate_luoshu_catalog};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_hetu_cardinalities() {
    let catalog = generate_hetu_catalog();
    assert_eq!(catalog.len(), 55);
    let counts: Vec<(u8, usize)> = catalog.group_counts().into_iter().collect();
    let expected: Vec<(u8, usize)> = (1..=10u8).map(|v| (v, usize::from(v))).collect();
    assert_eq!(counts, expected);
    assert!(catalog.validate().is_ok());
}

#[test]
fn test_luoshu_cardinalities() {
    let catalog = generate_luoshu_catalog();
    assert_eq!(catalog.len(), 45);
    for value in 1..=9u8 {
        assert_eq!(catalog.group(value).count(), usize::from(value));
    }
    assert!(catalog.validate().is_ok());
}

#[test_case(1, Face::Heaven, Zone::North; "one is heaven north")]
#[test_case(7, Face::Heaven, Zone::South; "seven is heaven south")]
#[test_case(2, Face::Earth, Zone::South; "two is earth south")]
#[test_case(4, Face::Earth, Zone::West; "four is earth west")]
#[test_case(5, Face::Pivot, Zone::Center; "five is the pivot centre")]
#[test_case(10, Face::Pivot, Zone::Center; "ten is the pivot ring")]
fn test_hetu_group_placement(value: u8, face: Face, zone: Zone) {
    let catalog = generate_hetu_catalog();
    let expected_y = match face {
        Face::Heaven => CUBE_HALF,
        Face::Earth => -CUBE_HALF,
        Face::Pivot => 0.0,
    };
    for (_, point) in catalog.group(value) {
        assert_eq!(point.face, face);
        assert_eq!(point.zone, zone);
        assert_eq!(point.position.y, expected_y);
        assert_eq!(point.polarity, Polarity::of(value));
    }
}

#[test]
fn test_heaven_south_holds_seven() {
    let catalog = generate_hetu_catalog();
    let count = catalog
        .points()
        .iter()
        .filter(|p| p.face == Face::Heaven && p.zone == Zone::South)
        .count();
    assert_eq!(count, 7);
}

#[test]
fn test_identifiers_resolve() {
    let catalog = generate_hetu_catalog();
    for (index, point) in catalog.points().iter().enumerate() {
        assert_eq!(catalog.index_of(point.id()), Ok(index));
    }
    assert!(catalog.index_of("hetu-11-00").is_err());
}

#[test]
fn test_luoshu_centre_group() {
    let catalog = generate_luoshu_catalog();
    let arm = 0.6 * DOT_GAP;
    let offsets: Vec<(f32, f32)> = catalog
        .group(5)
        .map(|(_, p)| (p.local_offset.x, p.local_offset.y))
        .collect();
    assert_eq!(
        offsets,
        vec![(0.0, 0.0), (0.0, arm), (arm, 0.0), (0.0, -arm), (-arm, 0.0)]
    );

    // On the sphere every centre dot collapses onto the origin
    let off_centre: Vec<Vec3> = catalog
        .group(5)
        .map(|(_, p)| p.sphere_position)
        .filter(|p| p.length() > 1e-6)
        .collect();
    assert_eq!(off_centre, Vec::<Vec3>::new());
    for (_, point) in catalog.group(5) {
        assert_eq!(point.sphere_position, Vec3::ZERO);
    }
}

#[test]
fn test_luoshu_outer_dots_near_sphere() {
    let catalog = generate_luoshu_catalog();
    for point in catalog.points().iter().filter(|p| p.value != 5) {
        let radius = point.sphere_position.length();
        assert!(radius >= SPHERE_RADIUS - 1e-4);
        assert!(radius < SPHERE_RADIUS + 1.0);
    }
}

#[test]
fn test_luoshu_symbols_on_outer_groups() {
    let catalog = generate_luoshu_catalog();
    let symbols = catalog.points().iter().filter(|p| p.symbol.is_some()).count();
    assert_eq!(symbols, 8);
    assert!(catalog.group(5).all(|(_, p)| p.symbol.is_none()));
}
