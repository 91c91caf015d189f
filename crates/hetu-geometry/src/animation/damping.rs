//! Exponentially damped scalar used for blend factors

use log::trace;

/// Distance below which a damped value snaps onto its target
pub const SNAP_EPSILON: f32 = 1e-4;

/// Frame-rate independent exponential approach toward `target`
///
/// `rate` is in 1/s. The result never overshoots the target.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 || rate <= 0.0 {
        return current;
    }
    target + (current - target) * (-rate * dt).exp()
}

/// A value in [0, 1] eased toward a target once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DampedScalar {
    current: f32,
    target: f32,
    rate: f32,
}

impl DampedScalar {
    /// Create a damped scalar resting at `value`
    pub fn new(value: f32, rate: f32) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            current: value,
            target: value,
            rate,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Value being approached
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set the value to approach
    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    /// Jump straight to a value, dropping any pending approach
    pub fn reset(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        self.current = value;
        self.target = value;
    }

    /// Check if the value has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.is_settled() {
            return;
        }
        let next = damp(self.current, self.target, self.rate, dt).clamp(0.0, 1.0);
        self.current = if (next - self.target).abs() < SNAP_EPSILON {
            self.target
        } else {
            next
        };
        trace!("Damped {:.5} -> target {:.1}", self.current, self.target);
    }
}
