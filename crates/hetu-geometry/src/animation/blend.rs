//! Static-to-animated position blending

use glam::Vec3;

use crate::modes::ModeConfig;

/// Blend a static position toward an animated one
///
/// `blend` is 0 for fully static and 1 for fully animated. A zero blend
/// returns `static_position` bit for bit.
pub fn blend_position(static_position: Vec3, animated: Vec3, blend: f32) -> Vec3 {
    if blend == 0.0 {
        return static_position;
    }
    static_position + (animated - static_position) * blend
}

/// Rendered position of a point under several simultaneously blended modes
///
/// Each mode contributes its own displacement from the static position,
/// weighted by its blend factor. While one mode fades out and another fades
/// in, the point moves continuously between them.
pub fn compose_position(static_position: Vec3, modes: &[(&ModeConfig, f32)], t: f32) -> Vec3 {
    modes
        .iter()
        .fold(static_position, |acc, (config, blend)| {
            acc + (blend_position(static_position, config.evaluate(t), *blend) - static_position)
        })
}
