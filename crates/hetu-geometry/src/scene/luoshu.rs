//! Per-frame driver of the Luo Shu diagram

use glam::{Quat, Vec3};
use log::info;

use crate::animation::{DampedScalar, LuoShuIntent, LuoShuMorph, LuoShuState, blend_position};
use crate::catalog::{LuoShuCatalog, generate_luoshu_catalog};
use crate::error::Result;
use crate::modes::CircuitPath;
use crate::settings::AnimationSettings;

/// Luo Shu catalog, circuit and the layout state driving them
#[derive(Debug, Clone)]
pub struct LuoShuAnimator {
    catalog: LuoShuCatalog,
    circuit: CircuitPath,
    state: LuoShuState,
    sphere_blend: DampedScalar,
    projection_blend: DampedScalar,
    flow_clock: f32,
    rotation_clock: f32,
    flow_speed: f32,
    rotation_speed: f32,
    positions: Vec<Vec3>,
    circuit_points: Vec<Vec3>,
    flow_marker: Option<Vec3>,
}

/// Place one point given its flat and spherical layouts
///
/// The sphere layout is first turned about y, then flattened toward z = 0 by
/// `projection`, and the result is blended with the flat grid by `sphere`.
fn layout(plane: Vec3, sphere_position: Vec3, rotation: Quat, sphere: f32, projection: f32) -> Vec3 {
    let rotated = rotation * sphere_position;
    let flattened = Vec3::new(rotated.x, rotated.y, 0.0);
    blend_position(plane, rotated.lerp(flattened, projection), sphere)
}

impl LuoShuAnimator {
    /// Generate the catalog and the circuit through `settings.circuit_order`
    pub fn new(settings: &AnimationSettings) -> Result<Self> {
        let catalog = generate_luoshu_catalog();
        catalog.validate()?;
        let circuit =
            CircuitPath::build(&catalog, &settings.circuit_order, settings.circuit_samples)?;

        let positions = catalog.points().iter().map(|p| p.plane_position).collect();
        let circuit_points = circuit.samples().iter().map(|s| s.plane).collect();

        info!(
            "Luo Shu animator ready: {} points, {} circuit samples",
            catalog.len(),
            circuit.samples().len()
        );

        Ok(Self {
            catalog,
            circuit,
            state: LuoShuState::default(),
            sphere_blend: DampedScalar::new(0.0, settings.damping_rate),
            projection_blend: DampedScalar::new(0.0, settings.damping_rate),
            flow_clock: 0.0,
            rotation_clock: 0.0,
            flow_speed: settings.flow_speed,
            rotation_speed: settings.rotation_speed,
            positions,
            circuit_points,
            flow_marker: None,
        })
    }

    /// Forward an intent to the layout state
    pub fn apply(&mut self, intent: LuoShuIntent) -> bool {
        let changed = self.state.apply(intent);
        if intent == LuoShuIntent::Reset {
            self.flow_clock = 0.0;
        }
        changed
    }

    /// Advance one frame: clocks, blends, then positions
    pub fn update(&mut self, dt: f32) {
        if self.state.flow_running {
            self.flow_clock += dt;
        }
        if self.state.rotating {
            self.rotation_clock += dt;
        }

        self.sphere_blend.set_target(self.state.sphere_target());
        self.projection_blend
            .set_target(self.state.projection_target());
        self.sphere_blend.update(dt);
        self.projection_blend.update(dt);

        if !self.state.rotating && self.sphere_blend.value() == 0.0 {
            self.rotation_clock = 0.0;
        }

        self.write_positions();
    }

    fn write_positions(&mut self) {
        let rotation = self.rotation();
        let sphere = self.sphere_blend.value();
        let projection = self.projection_blend.value();

        for (slot, point) in self.positions.iter_mut().zip(self.catalog.points()) {
            *slot = layout(
                point.plane_position,
                point.sphere_position,
                rotation,
                sphere,
                projection,
            );
        }

        for (slot, sample) in self.circuit_points.iter_mut().zip(self.circuit.samples()) {
            *slot = layout(sample.plane, sample.sphere, rotation, sphere, projection);
        }

        self.flow_marker = self.state.flow_running.then(|| {
            let sample = self.circuit.sample_at(self.flow_clock * self.flow_speed);
            layout(sample.plane, sample.sphere, rotation, sphere, projection)
        });
    }

    /// Current turn of the sphere about y
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_clock * self.rotation_speed)
    }

    /// The generated catalog
    pub fn catalog(&self) -> &LuoShuCatalog {
        &self.catalog
    }

    /// The sampled energy circuit
    pub fn circuit(&self) -> &CircuitPath {
        &self.circuit
    }

    /// Layout state
    pub fn state(&self) -> LuoShuState {
        self.state
    }

    /// Current morph target
    pub fn morph(&self) -> LuoShuMorph {
        self.state.morph
    }

    /// Current flat-to-sphere blend factor
    pub fn sphere_blend(&self) -> f32 {
        self.sphere_blend.value()
    }

    /// Current sphere-to-projection blend factor
    pub fn projection_blend(&self) -> f32 {
        self.projection_blend.value()
    }

    /// Seconds the energy flow has been running since the last reset
    pub fn flow_clock(&self) -> f32 {
        self.flow_clock
    }

    /// Seconds of accumulated sphere rotation
    pub fn rotation_clock(&self) -> f32 {
        self.rotation_clock
    }

    /// Rendered positions, indexed like the catalog
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rendered circuit line
    pub fn circuit_points(&self) -> &[Vec3] {
        &self.circuit_points
    }

    /// Position of the energy pulse while the flow runs
    pub fn flow_marker(&self) -> Option<Vec3> {
        self.flow_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(animator: &mut LuoShuAnimator, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            animator.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_sphere_morph_reaches_sphere() {
        let mut animator = LuoShuAnimator::new(&AnimationSettings::default()).unwrap();
        animator.apply(LuoShuIntent::Select(LuoShuMorph::Sphere));
        settle(&mut animator, 5.0);
        assert_eq!(animator.sphere_blend(), 1.0);
        for (position, point) in animator.positions().iter().zip(animator.catalog().points()) {
            assert!((*position - point.sphere_position).length() < 1e-4);
        }
    }

    #[test]
    fn test_projection_flattens_z() {
        let mut animator = LuoShuAnimator::new(&AnimationSettings::default()).unwrap();
        animator.apply(LuoShuIntent::Select(LuoShuMorph::Projection));
        settle(&mut animator, 5.0);
        for position in animator.positions() {
            assert!(position.z.abs() < 1e-5);
        }
    }

    #[test]
    fn test_flow_marker_only_while_running() {
        let mut animator = LuoShuAnimator::new(&AnimationSettings::default()).unwrap();
        animator.update(1.0 / 60.0);
        assert!(animator.flow_marker().is_none());

        animator.apply(LuoShuIntent::ToggleRun);
        settle(&mut animator, 1.0);
        assert!(animator.flow_marker().is_some());
        assert!(animator.flow_clock() > 0.9);

        animator.apply(LuoShuIntent::Reset);
        assert_eq!(animator.flow_clock(), 0.0);
        animator.update(1.0 / 60.0);
        assert!(animator.flow_marker().is_none());
    }

    #[test]
    fn test_rotation_keeps_radius() {
        let mut animator = LuoShuAnimator::new(&AnimationSettings::default()).unwrap();
        animator.apply(LuoShuIntent::Select(LuoShuMorph::Sphere));
        animator.apply(LuoShuIntent::ToggleRotate);
        settle(&mut animator, 5.0);
        assert!(animator.rotation_clock() > 4.9);
        for (position, point) in animator.positions().iter().zip(animator.catalog().points()) {
            assert!((position.length() - point.sphere_position.length()).abs() < 1e-3);
        }
    }
}
