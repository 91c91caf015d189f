//! Two-armed spiral galaxy
//!
//! Arms follow `r = R0 + k·φ`. Consecutive dots are spaced by a constant arc
//! length (`Δφ = gap / r`), so the spacing looks even from the core to the
//! rim while group boundaries open a wider gap.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use log::info;

use super::{
    CORE_GROUP, ModeConfig, ModeMap, PositionKind, RING_GROUP, Spin, Vertical, collect_map,
    group_steps,
};
use crate::catalog::HeTuCatalog;
use crate::error::Result;
use crate::sequence::{EVEN_SEQUENCE, ODD_SEQUENCE, sort_by_group_sequence};

/// Radius of the ring formed by group 10
pub const RING_RADIUS: f32 = 1.2;
/// Arm radius at φ = 0
pub const ARM_BASE_RADIUS: f32 = 2.0;
/// Radial growth per radian of winding
pub const ARM_GROWTH: f32 = 0.55;
/// Arc length between neighbours of the same group
pub const GAP_SAME_GROUP: f32 = 0.6;
/// Arc length between the last dot of a group and the first of the next
pub const GAP_NEW_GROUP: f32 = 1.6;
/// Rigid rotation speed of the arms, radians per second
pub const GALAXY_SPEED: f32 = 0.35;
/// Wobble amplitude at the start of an arm
pub const WOBBLE_BASE: f32 = 0.1;
/// Wobble amplitude growth per radian of winding
pub const WOBBLE_GROWTH: f32 = 0.04;
/// Wobble angular frequency, radians per second
pub const WOBBLE_FREQUENCY: f32 = 1.3;

/// Angular offset of each arm's first dot
const ARMS: [([u8; 4], f32); 2] = [(ODD_SEQUENCE, FRAC_PI_2), (EVEN_SEQUENCE, -FRAC_PI_2)];

fn core_config(position: Vec3) -> ModeConfig {
    ModeConfig {
        kind: PositionKind::Core,
        radius: (position.x * position.x + position.z * position.z).sqrt(),
        start_angle: position.z.atan2(position.x),
        speed: 0.0,
        spin: Spin::None,
        vertical: Vertical::Fixed(0.0),
    }
}

fn ring_config(slot: usize, count: usize) -> ModeConfig {
    ModeConfig {
        kind: PositionKind::Ring,
        radius: RING_RADIUS,
        start_angle: TAU * slot as f32 / count as f32,
        speed: 0.0,
        spin: Spin::None,
        vertical: Vertical::Fixed(0.0),
    }
}

fn arm_config(phi: f32, offset: f32) -> ModeConfig {
    ModeConfig {
        kind: PositionKind::Arm,
        radius: ARM_BASE_RADIUS + ARM_GROWTH * phi,
        // Counter-winding: the angle falls as the arm unrolls
        start_angle: offset - phi,
        speed: GALAXY_SPEED,
        spin: Spin::Ccw,
        vertical: Vertical::Wobble {
            amplitude: WOBBLE_BASE + WOBBLE_GROWTH * phi,
            frequency: WOBBLE_FREQUENCY,
            phase: phi,
        },
    }
}

/// Generate galaxy-mode parameters for every He Tu point
///
/// Group 5 becomes the core, group 10 the ring, and the odd and even
/// traversals the two arms starting at +90° and -90°.
pub fn generate_galaxy_map(catalog: &HeTuCatalog) -> Result<ModeMap> {
    let mut configs: Vec<Option<ModeConfig>> = vec![None; catalog.len()];

    for (index, point) in catalog.group(CORE_GROUP) {
        configs[index] = Some(core_config(point.position));
    }

    let ring: Vec<usize> = catalog.group(RING_GROUP).map(|(index, _)| index).collect();
    for (slot, &index) in ring.iter().enumerate() {
        configs[index] = Some(ring_config(slot, ring.len()));
    }

    for (sequence, offset) in ARMS {
        let order = sort_by_group_sequence(catalog.points(), &sequence)?;
        let mut phi = 0.0f32;
        for (index, gap) in group_steps(catalog, &order, GAP_SAME_GROUP, GAP_NEW_GROUP) {
            let radius = ARM_BASE_RADIUS + ARM_GROWTH * phi;
            phi += gap / radius;
            configs[index] = Some(arm_config(phi, offset));
        }
        info!(
            "Galaxy arm {:?}: {} points, {:.3} rad of winding",
            sequence,
            order.len(),
            phi
        );
    }

    collect_map(catalog, configs)
}
