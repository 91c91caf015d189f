//! Per-point parameters of an animated mode

use std::ops::Index;

use glam::Vec3;

use crate::animation::Lerp;
use crate::types::PointIndex;

/// Role of a point inside an animated mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionKind {
    /// Centre-group point kept at its own polar coordinates
    Core,
    /// Centre-group point spread evenly on a small ring
    Ring,
    /// Point placed along a spiral arm or helix strand
    Arm,
}

/// Rotation direction applied as `θ(t) = θ0 + sign · speed · t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    /// Counter-clockwise, angle grows with time
    Ccw,
    /// Clockwise, angle shrinks with time
    Cw,
    /// Does not rotate
    None,
}

impl Spin {
    /// Sign multiplier for the angular velocity
    pub fn sign(&self) -> f32 {
        match self {
            Spin::Ccw => 1.0,
            Spin::Cw => -1.0,
            Spin::None => 0.0,
        }
    }
}

/// Vertical behaviour of a point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertical {
    /// Sinusoidal bob, `amplitude · sin(frequency · t + phase)`
    Wobble {
        amplitude: f32,
        frequency: f32,
        phase: f32,
    },
    /// Constant height
    Fixed(f32),
}

impl Vertical {
    /// Height at time `t`
    pub fn height_at(&self, t: f32) -> f32 {
        match *self {
            Vertical::Wobble {
                amplitude,
                frequency,
                phase,
            } => amplitude * (frequency * t + phase).sin(),
            Vertical::Fixed(height) => height,
        }
    }
}

impl Lerp for Vertical {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        match (*self, *other) {
            (
                Vertical::Wobble {
                    amplitude: a0,
                    frequency: f0,
                    phase: p0,
                },
                Vertical::Wobble {
                    amplitude: a1,
                    frequency: f1,
                    phase: p1,
                },
            ) => Vertical::Wobble {
                amplitude: Lerp::lerp(&a0, &a1, t),
                frequency: Lerp::lerp(&f0, &f1, t),
                phase: Lerp::lerp(&p0, &p1, t),
            },
            (Vertical::Fixed(h0), Vertical::Fixed(h1)) => {
                Vertical::Fixed(Lerp::lerp(&h0, &h1, t))
            }
            // Mixed kinds never share a segment; keep the nearer endpoint
            _ => {
                if t < 0.5 {
                    *self
                } else {
                    *other
                }
            }
        }
    }
}

/// Polar/conical parameters of one point in one mode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeConfig {
    pub kind: PositionKind,
    /// Distance from the y axis
    pub radius: f32,
    /// Angle at t = 0, radians in the x-z plane
    pub start_angle: f32,
    /// Angular speed multiplier, radians per second
    pub speed: f32,
    pub spin: Spin,
    pub vertical: Vertical,
}

impl ModeConfig {
    /// Angle at time `t`
    pub fn angle_at(&self, t: f32) -> f32 {
        self.start_angle + self.spin.sign() * self.speed * t
    }

    /// Animated Cartesian position at time `t`
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let theta = self.angle_at(t);
        Vec3::new(
            self.radius * theta.cos(),
            self.vertical.height_at(t),
            self.radius * theta.sin(),
        )
    }
}

impl Lerp for ModeConfig {
    /// Interpolate in parameter space so samples follow the curve
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            kind: self.kind,
            radius: Lerp::lerp(&self.radius, &other.radius, t),
            start_angle: Lerp::lerp(&self.start_angle, &other.start_angle, t),
            speed: Lerp::lerp(&self.speed, &other.speed, t),
            spin: self.spin,
            vertical: self.vertical.lerp(&other.vertical, t),
        }
    }
}

/// Mode configs for every point of a catalog, indexed like the catalog arena
#[derive(Debug, Clone, PartialEq)]
pub struct ModeMap {
    configs: Vec<ModeConfig>,
}

impl ModeMap {
    pub(crate) fn new(configs: Vec<ModeConfig>) -> Self {
        Self { configs }
    }

    /// Config of a point
    pub fn get(&self, index: PointIndex) -> Option<&ModeConfig> {
        self.configs.get(index)
    }

    /// All configs in arena order
    pub fn configs(&self) -> &[ModeConfig] {
        &self.configs
    }

    /// Number of mapped points
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl Index<PointIndex> for ModeMap {
    type Output = ModeConfig;

    fn index(&self, index: PointIndex) -> &Self::Output {
        &self.configs[index]
    }
}
