//! Interpolation primitives shared by the blend engine

use glam::{Vec2, Vec3};

/// Trait for types that can be linearly interpolated
pub trait Lerp: Clone {
    /// Linear interpolation between self and other
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::lerp(*self, *other, t)
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            Lerp::lerp(&self.x, &other.x, t),
            Lerp::lerp(&self.y, &other.y, t),
            Lerp::lerp(&self.z, &other.z, t),
        )
    }
}
