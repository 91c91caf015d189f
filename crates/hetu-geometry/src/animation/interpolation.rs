//! Curve interpolation between two endpoints
//!
//! Two families: spherical interpolation of directions, used for curves
//! that must hug a sphere, and parameter-space sampling of a segment
//! between two mode configs, used for line geometry between dots.

use std::f32::consts::PI;

use glam::Vec3;

use super::blend::blend_position;
use super::types::Lerp;
use crate::modes::ModeConfig;

/// Angles closer than this to 0 or π fall back to linear interpolation
pub const SLERP_EPSILON: f32 = 1e-4;

/// Spherical linear interpolation between two unit directions
///
/// Near-identical and near-antipodal directions have no stable great
/// circle; both degrade to a straight lerp.
pub fn slerp_direction(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let dot = a.dot(b).clamp(-1.0, 1.0);
    let angle = dot.acos();

    if angle < SLERP_EPSILON || PI - angle < SLERP_EPSILON {
        return a.lerp(b, t);
    }

    let sin_angle = angle.sin();
    let s0 = ((1.0 - t) * angle).sin() / sin_angle;
    let s1 = (t * angle).sin() / sin_angle;
    a * s0 + b * s1
}

/// Interpolate two points on a sphere of the given radius
///
/// Both endpoints are normalized first, so the result sits on the sphere
/// whatever the length of the inputs.
pub fn slerp_on_sphere(a: Vec3, b: Vec3, radius: f32, t: f32) -> Vec3 {
    let direction = slerp_direction(a.normalize_or_zero(), b.normalize_or_zero(), t);
    direction * radius
}

/// Fraction of sample `k` in a segment split into `samples` steps
pub fn sample_fraction(k: usize, samples: usize) -> f32 {
    if samples == 0 {
        0.0
    } else {
        k as f32 / samples as f32
    }
}

/// One end of a line segment: static position plus mode configs
#[derive(Debug, Clone, Copy)]
pub struct SegmentEnd<'a> {
    pub position: Vec3,
    pub configs: &'a [(ModeConfig, f32)],
}

/// Position of a point between two dots at fraction `f`
///
/// The static positions are lerped. Each mode's parameters (radius, angle,
/// height) are interpolated before evaluating at time `t`, which keeps
/// helix segments helical instead of chorded. `configs` pairs each mode
/// config with its current blend factor; both ends must list the same
/// modes in the same order.
pub fn sample_between(start: SegmentEnd<'_>, end: SegmentEnd<'_>, f: f32, t: f32) -> Vec3 {
    let base = start.position.lerp(end.position, f);
    start
        .configs
        .iter()
        .zip(end.configs.iter())
        .fold(base, |acc, ((a, blend), (b, _))| {
            let animated = a.lerp(b, f).evaluate(t);
            acc + (blend_position(base, animated, *blend) - base)
        })
}

/// Sample a segment into `samples + 1` points, both ends included
pub fn sample_segment(
    start: SegmentEnd<'_>,
    end: SegmentEnd<'_>,
    samples: usize,
    t: f32,
) -> Vec<Vec3> {
    (0..=samples)
        .map(|k| sample_between(start, end, sample_fraction(k, samples), t))
        .collect()
}
