//! Tunable animation settings

use crate::animation::DEFAULT_MORPH_DURATION;
use crate::error::{DiagramError, Result};
use crate::modes::DEFAULT_CIRCUIT_ORDER;
use crate::modes::circuit::DEFAULT_SAMPLES_PER_LEG;

/// Timing and sampling parameters of a [`crate::Scene`]
///
/// Geometry constants are fixed; only how fast things move and how finely
/// curves are sampled can be tuned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationSettings {
    /// Length of a morph or return, seconds
    pub morph_duration: f64,
    /// Exponential damping rate of blend factors, 1/s
    pub damping_rate: f32,
    /// Samples between two dots of a traversal line
    pub segment_samples: usize,
    /// Samples per leg of the energy circuit
    pub circuit_samples: usize,
    /// Luo Shu anchor visiting order
    pub circuit_order: Vec<u8>,
    /// Circuit lengths per second travelled by the energy pulse
    pub flow_speed: f32,
    /// Sphere rotation speed, radians per second
    pub rotation_speed: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            morph_duration: DEFAULT_MORPH_DURATION,
            damping_rate: 4.0,
            segment_samples: 8,
            circuit_samples: DEFAULT_SAMPLES_PER_LEG,
            circuit_order: DEFAULT_CIRCUIT_ORDER.to_vec(),
            flow_speed: 0.1,
            rotation_speed: 0.4,
        }
    }
}

impl AnimationSettings {
    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.morph_duration.is_finite() && self.morph_duration > 0.0) {
            return Err(DiagramError::InvalidSettings(format!(
                "morph_duration must be positive, got {}",
                self.morph_duration
            )));
        }
        if !(self.damping_rate.is_finite() && self.damping_rate > 0.0) {
            return Err(DiagramError::InvalidSettings(format!(
                "damping_rate must be positive, got {}",
                self.damping_rate
            )));
        }
        if self.segment_samples == 0 || self.circuit_samples == 0 {
            return Err(DiagramError::InvalidSettings(
                "sample counts must be at least 1".to_string(),
            ));
        }
        if self.circuit_order.len() < 2 {
            return Err(DiagramError::InvalidSettings(
                "circuit_order needs at least two anchors".to_string(),
            ));
        }
        if let Some(&bad) = self.circuit_order.iter().find(|v| !(1..=9).contains(*v)) {
            return Err(DiagramError::InvalidSettings(format!(
                "circuit_order contains {bad}, expected values 1 to 9"
            )));
        }
        if !self.flow_speed.is_finite() || !self.rotation_speed.is_finite() {
            return Err(DiagramError::InvalidSettings(
                "speeds must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
