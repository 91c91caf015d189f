//! Luo Shu sphere anchors and dot placement
//!
//! Anchors: 9 and 1 on the poles, 3 and 7 on the equator twisted about the
//! y axis, the even groups on the corners of a tetrahedron, and 5 at the
//! centre of the sphere.

use glam::{Quat, Vec2, Vec3};

use crate::catalog::SPHERE_RADIUS;

/// Group collapsed onto the sphere centre
pub const CENTER_GROUP: u8 = 5;

/// Twist of the equatorial anchors about the y axis, radians
pub const EQUATOR_TWIST: f32 = 15.0 * std::f32::consts::PI / 180.0;

/// Unit anchor direction of a group, `Vec3::ZERO` for the centre group
pub fn anchor_direction(value: u8) -> Option<Vec3> {
    let inv_sqrt3 = 1.0 / 3.0f32.sqrt();
    let (twist_sin, twist_cos) = EQUATOR_TWIST.sin_cos();
    let direction = match value {
        9 => Vec3::Y,
        1 => Vec3::NEG_Y,
        3 => Vec3::new(-twist_cos, 0.0, twist_sin),
        7 => Vec3::new(twist_cos, 0.0, -twist_sin),
        4 => Vec3::new(-1.0, 1.0, 1.0) * inv_sqrt3,
        2 => Vec3::new(1.0, 1.0, -1.0) * inv_sqrt3,
        8 => Vec3::new(-1.0, -1.0, -1.0) * inv_sqrt3,
        6 => Vec3::new(1.0, -1.0, 1.0) * inv_sqrt3,
        CENTER_GROUP => Vec3::ZERO,
        _ => return None,
    };
    Some(direction)
}

/// Anchor point of a group on (or, for 5, at the centre of) the sphere
pub fn anchor_position(value: u8) -> Option<Vec3> {
    anchor_direction(value).map(|direction| direction * SPHERE_RADIUS)
}

/// Place a glyph dot on the sphere
///
/// The glyph lies in the x-y plane with +z as its normal. It is carried by
/// the shortest rotation from +z onto the anchor direction and moved out to
/// the anchor. Every dot of the centre group lands on the origin with no
/// rotation; its tally offsets only shape the flat grid.
pub fn project_onto_sphere(value: u8, local_offset: Vec2) -> Vec3 {
    match anchor_direction(value) {
        Some(direction) if value != CENTER_GROUP => {
            let rotation = Quat::from_rotation_arc(Vec3::Z, direction);
            direction * SPHERE_RADIUS + rotation * local_offset.extend(0.0)
        }
        _ => Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_directions_are_unit() {
        for value in (1..=9u8).filter(|&v| v != CENTER_GROUP) {
            let d = anchor_direction(value).unwrap();
            assert!((d.length() - 1.0).abs() < 1e-6, "group {value}");
        }
        assert_eq!(anchor_direction(CENTER_GROUP), Some(Vec3::ZERO));
        assert_eq!(anchor_direction(10), None);
    }

    #[test]
    fn test_axis_pairs_are_antipodal() {
        for (a, b) in [(1, 9), (3, 7)] {
            let sum = anchor_direction(a).unwrap() + anchor_direction(b).unwrap();
            assert!(sum.length() < 1e-6, "{a} and {b}");
        }
    }

    #[test]
    fn test_even_groups_form_tetrahedron() {
        let corners: Vec<Vec3> = [2u8, 4, 6, 8]
            .iter()
            .map(|&v| anchor_direction(v).unwrap())
            .collect();
        // All six edges of a regular tetrahedron share the same length
        let edge = corners[0].distance(corners[1]);
        for i in 0..4 {
            for j in i + 1..4 {
                assert!((corners[i].distance(corners[j]) - edge).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_anchor_dot_lands_on_anchor() {
        let p = project_onto_sphere(9, Vec2::ZERO);
        assert!((p - Vec3::new(0.0, SPHERE_RADIUS, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_offset_lies_in_tangent_plane() {
        for value in [1u8, 2, 3, 4, 6, 7, 8, 9] {
            let direction = anchor_direction(value).unwrap();
            let p = project_onto_sphere(value, Vec2::new(0.3, -0.2));
            let tangent = p - direction * SPHERE_RADIUS;
            assert!(tangent.dot(direction).abs() < 1e-5, "group {value}");
            assert!((tangent.length() - Vec2::new(0.3, -0.2).length()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_centre_group_collapses_to_origin() {
        for offset in [Vec2::ZERO, Vec2::new(0.21, 0.0), Vec2::new(0.0, -0.21)] {
            assert_eq!(project_onto_sphere(CENTER_GROUP, offset), Vec3::ZERO);
        }
    }
}
