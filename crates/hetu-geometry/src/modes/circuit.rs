//! Luo Shu energy circuit
//!
//! A single curve visiting the group anchors in a given order. Legs between
//! two outer anchors follow the sphere's great circle; legs touching the
//! centre dive straight through the volume. Every sample also keeps its
//! counterpart on the flat grid so the whole path can morph with the dots.

use glam::Vec3;
use log::info;

use super::sphere::{CENTER_GROUP, anchor_direction};
use crate::animation::{sample_fraction, slerp_direction};
use crate::catalog::{LuoShuCatalog, SPHERE_RADIUS, grid_anchor};
use crate::error::{DiagramError, Result};

/// Default visiting order: 1 through 9 and back to 1
pub const DEFAULT_CIRCUIT_ORDER: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];

/// Default number of samples per leg
pub const DEFAULT_SAMPLES_PER_LEG: usize = 24;

/// Working radius of the circuit
pub const CIRCUIT_RADIUS: f32 = SPHERE_RADIUS;

/// One sample of the circuit in both layouts
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircuitSample {
    /// Position on the flat grid
    pub plane: Vec3,
    /// Position on (or through) the sphere
    pub sphere: Vec3,
    /// Index of the leg this sample belongs to
    pub leg: usize,
}

/// The sampled energy circuit
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitPath {
    order: Vec<u8>,
    samples: Vec<CircuitSample>,
}

struct Anchor {
    value: u8,
    plane: Vec3,
    direction: Vec3,
}

fn resolve_anchor(catalog: &LuoShuCatalog, value: u8) -> Result<Anchor> {
    if catalog.group(value).next().is_none() {
        return Err(DiagramError::UnknownGroup(value));
    }
    let plane = grid_anchor(value).ok_or(DiagramError::UnknownGroup(value))?;
    let direction = anchor_direction(value).ok_or(DiagramError::UnknownGroup(value))?;
    Ok(Anchor {
        value,
        plane,
        direction,
    })
}

fn leg_point(from: &Anchor, to: &Anchor, f: f32) -> Vec3 {
    if from.value == CENTER_GROUP || to.value == CENTER_GROUP {
        (from.direction * CIRCUIT_RADIUS).lerp(to.direction * CIRCUIT_RADIUS, f)
    } else {
        slerp_direction(from.direction, to.direction, f) * CIRCUIT_RADIUS
    }
}

impl CircuitPath {
    /// Sample the circuit through `order` with `samples_per_leg` steps per leg
    pub fn build(catalog: &LuoShuCatalog, order: &[u8], samples_per_leg: usize) -> Result<Self> {
        if order.len() < 2 {
            return Err(DiagramError::InvalidCircuit(format!(
                "needs at least two anchors, got {}",
                order.len()
            )));
        }
        if samples_per_leg == 0 {
            return Err(DiagramError::InvalidCircuit(
                "needs at least one sample per leg".to_string(),
            ));
        }

        let anchors = order
            .iter()
            .map(|&value| resolve_anchor(catalog, value))
            .collect::<Result<Vec<_>>>()?;

        let mut samples = Vec::with_capacity((anchors.len() - 1) * samples_per_leg + 1);
        for (leg, pair) in anchors.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            // Legs after the first share their start with the previous end
            let first = if leg == 0 { 0 } else { 1 };
            for k in first..=samples_per_leg {
                let f = sample_fraction(k, samples_per_leg);
                samples.push(CircuitSample {
                    plane: from.plane.lerp(to.plane, f),
                    sphere: leg_point(from, to, f),
                    leg,
                });
            }
        }

        info!(
            "Built circuit {:?} with {} samples",
            order,
            samples.len()
        );

        Ok(Self {
            order: order.to_vec(),
            samples,
        })
    }

    /// Circuit through [`DEFAULT_CIRCUIT_ORDER`]
    pub fn default_for(catalog: &LuoShuCatalog) -> Result<Self> {
        Self::build(catalog, &DEFAULT_CIRCUIT_ORDER, DEFAULT_SAMPLES_PER_LEG)
    }

    /// Visiting order
    pub fn order(&self) -> &[u8] {
        &self.order
    }

    /// All samples in path order
    pub fn samples(&self) -> &[CircuitSample] {
        &self.samples
    }

    /// Number of legs
    pub fn leg_count(&self) -> usize {
        self.order.len() - 1
    }

    /// Sample at a fraction of the path, wrapping outside [0, 1)
    ///
    /// Fractions are measured in samples, not arc length.
    pub fn sample_at(&self, fraction: f32) -> CircuitSample {
        let last = self.samples.len() - 1;
        let wrapped = fraction.rem_euclid(1.0);
        let position = wrapped * last as f32;
        let index = (position.floor() as usize).min(last);
        let next = (index + 1).min(last);
        let f = position - index as f32;

        let a = self.samples[index];
        let b = self.samples[next];
        CircuitSample {
            plane: a.plane.lerp(b.plane, f),
            sphere: a.sphere.lerp(b.sphere, f),
            leg: a.leg,
        }
    }
}
