//! Conical double helix
//!
//! Both traversals climb through the same height range. Radius widens with
//! normalized height and the angle advances with height. The two strands
//! are half a turn apart and both rotate counter-clockwise, unlike the
//! counter-wound galaxy arms.

use std::f32::consts::PI;

use log::info;

use super::{
    CORE_GROUP, ModeConfig, ModeMap, PositionKind, RING_GROUP, Spin, Vertical, collect_map,
    group_steps,
};
use crate::catalog::HeTuCatalog;
use crate::error::Result;
use crate::sequence::{EVEN_SEQUENCE, ODD_SEQUENCE, sort_by_group_sequence};

/// Height step between neighbours of the same group
pub const HELIX_STEP_SAME: f32 = 0.35;
/// Height step when a strand enters a new group
pub const HELIX_STEP_NEW: f32 = 0.9;
/// Strand radius at the bottom
pub const HELIX_INNER_RADIUS: f32 = 1.0;
/// Strand radius at the top
pub const HELIX_OUTER_RADIUS: f32 = 4.0;
/// Twist per unit of height, radians
pub const HELIX_TWIST: f32 = 0.9;
/// Rotation speed of both strands, radians per second
pub const HELIX_SPEED: f32 = 0.5;

const STRANDS: [([u8; 4], f32); 2] = [(ODD_SEQUENCE, 0.0), (EVEN_SEQUENCE, PI)];

/// Generate helix-mode parameters for every He Tu point
///
/// Centre groups stay at their static polar position on the pivot layer.
pub fn generate_helix_map(catalog: &HeTuCatalog) -> Result<ModeMap> {
    let mut configs: Vec<Option<ModeConfig>> = vec![None; catalog.len()];

    for value in [CORE_GROUP, RING_GROUP] {
        for (index, point) in catalog.group(value) {
            let p = point.position;
            configs[index] = Some(ModeConfig {
                kind: PositionKind::Core,
                radius: (p.x * p.x + p.z * p.z).sqrt(),
                start_angle: p.z.atan2(p.x),
                speed: 0.0,
                spin: Spin::None,
                vertical: Vertical::Fixed(0.0),
            });
        }
    }

    for (sequence, phase) in STRANDS {
        let order = sort_by_group_sequence(catalog.points(), &sequence)?;

        let mut climbed = Vec::with_capacity(order.len());
        let mut height = 0.0f32;
        for (index, step) in group_steps(catalog, &order, HELIX_STEP_SAME, HELIX_STEP_NEW) {
            height += step;
            climbed.push((index, height));
        }

        let total = height;
        for (index, h) in climbed {
            let normalized = if total > 0.0 { h / total } else { 0.0 };
            configs[index] = Some(ModeConfig {
                kind: PositionKind::Arm,
                radius: HELIX_INNER_RADIUS + (HELIX_OUTER_RADIUS - HELIX_INNER_RADIUS) * normalized,
                start_angle: phase + h * HELIX_TWIST,
                speed: HELIX_SPEED,
                spin: Spin::Ccw,
                vertical: Vertical::Fixed(h - total / 2.0),
            });
        }

        info!(
            "Helix strand {:?}: {} points over height {:.3}",
            sequence,
            order.len(),
            total
        );
    }

    collect_map(catalog, configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generate_hetu_catalog;

    fn strand(sequence: &[u8]) -> Vec<ModeConfig> {
        let catalog = generate_hetu_catalog();
        let map = generate_helix_map(&catalog).unwrap();
        sort_by_group_sequence(catalog.points(), sequence)
            .unwrap()
            .into_iter()
            .map(|i| map[i])
            .collect()
    }

    fn height(config: &ModeConfig) -> f32 {
        match config.vertical {
            Vertical::Fixed(h) => h,
            Vertical::Wobble { .. } => panic!("helix strands use fixed heights"),
        }
    }

    #[test]
    fn test_strand_is_centred() {
        for sequence in [ODD_SEQUENCE, EVEN_SEQUENCE] {
            let configs = strand(&sequence);
            let first = height(&configs[0]);
            let last = height(&configs[configs.len() - 1]);
            assert!((first + last).abs() < 1e-5);
            assert!(first < 0.0);
        }
    }

    #[test]
    fn test_radius_spans_bounds() {
        let configs = strand(&ODD_SEQUENCE);
        assert!((configs[0].radius - HELIX_INNER_RADIUS).abs() < 1e-6);
        assert!((configs[configs.len() - 1].radius - HELIX_OUTER_RADIUS).abs() < 1e-5);
        assert!(configs.windows(2).all(|w| w[1].radius > w[0].radius));
    }

    #[test]
    fn test_strands_half_turn_apart_same_spin() {
        let odd = strand(&ODD_SEQUENCE);
        let even = strand(&EVEN_SEQUENCE);
        assert!((even[0].start_angle - odd[0].start_angle - PI).abs() < 1e-6);
        assert!(odd.iter().chain(even.iter()).all(|c| c.spin == Spin::Ccw));
    }

    #[test]
    fn test_angle_grows_with_height() {
        let configs = strand(&EVEN_SEQUENCE);
        for pair in configs.windows(2) {
            let dh = height(&pair[1]) - height(&pair[0]);
            let da = pair[1].start_angle - pair[0].start_angle;
            assert!((da - dh * HELIX_TWIST).abs() < 1e-4);
        }
    }
}
