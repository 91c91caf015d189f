//! Per-frame driver of the He Tu diagram

use glam::Vec3;
use log::{debug, info};

use crate::animation::{
    DampedScalar, HeTuFamily, HeTuIntent, HeTuPhase, HeTuStateMachine, SegmentEnd,
    compose_position, sample_segment,
};
use crate::catalog::{HeTuCatalog, generate_hetu_catalog};
use crate::error::Result;
use crate::modes::{ModeMap, generate_galaxy_map, generate_helix_map};
use crate::sequence::{EVEN_SEQUENCE, ODD_SEQUENCE, sort_by_group_sequence};
use crate::settings::AnimationSettings;
use crate::types::PointIndex;

/// A named ordered walk through catalog points
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    pub name: &'static str,
    pub indices: Vec<PointIndex>,
}

/// He Tu catalog, mode maps, state machine and the position arena they feed
#[derive(Debug, Clone)]
pub struct HeTuAnimator {
    catalog: HeTuCatalog,
    galaxy: ModeMap,
    helix: ModeMap,
    traversals: Vec<Traversal>,
    machine: HeTuStateMachine,
    /// Animation time fed to the mode configs
    clock: f32,
    galaxy_blend: DampedScalar,
    helix_blend: DampedScalar,
    segment_samples: usize,
    positions: Vec<Vec3>,
    paths: Vec<Vec<Vec3>>,
}

impl HeTuAnimator {
    /// Generate everything from the fixed constants
    pub fn new(settings: &AnimationSettings) -> Result<Self> {
        let catalog = generate_hetu_catalog();
        catalog.validate()?;

        let galaxy = generate_galaxy_map(&catalog)?;
        let helix = generate_helix_map(&catalog)?;
        let traversals = vec![
            Traversal {
                name: "yang",
                indices: sort_by_group_sequence(catalog.points(), &ODD_SEQUENCE)?,
            },
            Traversal {
                name: "yin",
                indices: sort_by_group_sequence(catalog.points(), &EVEN_SEQUENCE)?,
            },
        ];

        let positions = catalog.points().iter().map(|p| p.position).collect();
        let mut animator = Self {
            paths: vec![Vec::new(); traversals.len()],
            catalog,
            galaxy,
            helix,
            traversals,
            machine: HeTuStateMachine::new(settings.morph_duration),
            clock: 0.0,
            galaxy_blend: DampedScalar::new(0.0, settings.damping_rate),
            helix_blend: DampedScalar::new(0.0, settings.damping_rate),
            segment_samples: settings.segment_samples,
            positions,
        };
        animator.write_positions();

        info!(
            "He Tu animator ready: {} points, {} traversals",
            animator.catalog.len(),
            animator.traversals.len()
        );
        Ok(animator)
    }

    /// Forward an intent to the state machine
    pub fn apply(&mut self, intent: HeTuIntent) -> bool {
        self.machine.apply(intent)
    }

    /// Advance one frame: state machine, clock, blends, then positions
    pub fn update(&mut self, dt: f32) {
        if let Some(phase) = self.machine.tick(f64::from(dt)) {
            debug!("He Tu settled into {}", phase);
        }

        if self.machine.advances_clock() {
            self.clock += dt;
        }

        self.galaxy_blend
            .set_target(self.machine.blend_target(HeTuFamily::Galaxy));
        self.helix_blend
            .set_target(self.machine.blend_target(HeTuFamily::Helix));
        self.galaxy_blend.update(dt);
        self.helix_blend.update(dt);

        // Rewind only once nothing animated is visible any more
        if self.machine.phase() == HeTuPhase::Static
            && self.galaxy_blend.value() == 0.0
            && self.helix_blend.value() == 0.0
        {
            self.clock = 0.0;
        }

        self.write_positions();
    }

    fn write_positions(&mut self) {
        let t = self.clock;
        let galaxy_blend = self.galaxy_blend.value();
        let helix_blend = self.helix_blend.value();

        for (index, point) in self.catalog.points().iter().enumerate() {
            self.positions[index] = compose_position(
                point.position,
                &[
                    (&self.galaxy[index], galaxy_blend),
                    (&self.helix[index], helix_blend),
                ],
                t,
            );
        }

        for (path, traversal) in self.paths.iter_mut().zip(&self.traversals) {
            path.clear();
            if let [only] = traversal.indices.as_slice() {
                path.push(self.positions[*only]);
                continue;
            }
            for (segment, pair) in traversal.indices.windows(2).enumerate() {
                let start_configs = [
                    (self.galaxy[pair[0]], galaxy_blend),
                    (self.helix[pair[0]], helix_blend),
                ];
                let end_configs = [
                    (self.galaxy[pair[1]], galaxy_blend),
                    (self.helix[pair[1]], helix_blend),
                ];
                let start = SegmentEnd {
                    position: self.catalog.points()[pair[0]].position,
                    configs: &start_configs,
                };
                let end = SegmentEnd {
                    position: self.catalog.points()[pair[1]].position,
                    configs: &end_configs,
                };
                let samples = sample_segment(start, end, self.segment_samples, t);
                // Consecutive segments share their joint sample
                let skip = usize::from(segment > 0);
                path.extend(samples.into_iter().skip(skip));
            }
        }
    }

    /// The generated catalog
    pub fn catalog(&self) -> &HeTuCatalog {
        &self.catalog
    }

    /// Galaxy-mode configs
    pub fn galaxy_map(&self) -> &ModeMap {
        &self.galaxy
    }

    /// Helix-mode configs
    pub fn helix_map(&self) -> &ModeMap {
        &self.helix
    }

    /// The two traversals (odd and even)
    pub fn traversals(&self) -> &[Traversal] {
        &self.traversals
    }

    /// State machine
    pub fn machine(&self) -> &HeTuStateMachine {
        &self.machine
    }

    /// Current phase
    pub fn phase(&self) -> HeTuPhase {
        self.machine.phase()
    }

    /// Animation clock, seconds
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Current galaxy blend factor
    pub fn galaxy_blend(&self) -> f32 {
        self.galaxy_blend.value()
    }

    /// Current helix blend factor
    pub fn helix_blend(&self) -> f32 {
        self.helix_blend.value()
    }

    /// Rendered positions, indexed like the catalog
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rendered traversal lines, one per traversal
    pub fn paths(&self) -> &[Vec<Vec3>] {
        &self.paths
    }
}
