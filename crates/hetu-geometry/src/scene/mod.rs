//! Frame-driven scene holding both diagrams
//!
//! The scene is the boundary a renderer talks to: it takes [`Intent`]s,
//! advances time with [`Scene::update`] and hands out a [`Frame`] with
//! everything needed to draw the active diagram. Both diagrams keep
//! updating while hidden so switching back shows them where they would be.
//!
//! ```rust
//! use hetu_geometry::{AnimationSettings, Intent, Scene};
//!
//! let mut scene = Scene::new(AnimationSettings::default()).unwrap();
//! scene.apply("galaxy".parse::<Intent>().unwrap()).unwrap();
//! for _ in 0..120 {
//!     scene.update(1.0 / 60.0);
//! }
//! let frame = scene.frame();
//! assert_eq!(frame.phase, "RUNNING");
//! assert_eq!(frame.points.len(), 55);
//! ```

mod hetu;
mod luoshu;

pub use hetu::{HeTuAnimator, Traversal};
pub use luoshu::LuoShuAnimator;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use glam::Vec3;
use log::debug;

use crate::animation::{HeTuFamily, HeTuIntent, LuoShuIntent, LuoShuMorph};
use crate::error::{DiagramError, Result};
use crate::settings::AnimationSettings;
use crate::types::{Diagram, GroupedPoint, Mode};

bitflags! {
    /// Visual layers the renderer draws
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layers: u8 {
        /// Dot spheres
        const DOTS       = 0x01;
        /// Group number labels
        const NUMBERS    = 0x02;
        /// Trigram glyphs next to the Luo Shu groups
        const TRIGRAMS   = 0x04;
        /// Compass direction labels
        const DIRECTIONS = 0x08;
        /// Traversal lines and the energy circuit
        const LINES      = 0x10;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything a user can ask the scene to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectDiagram(Diagram),
    SelectMode(Mode),
    ToggleRun,
    ToggleRotate,
    Reset,
    ToggleLayer(Layers),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SelectDiagram(Diagram::HeTu) => write!(f, "diagram:hetu"),
            Intent::SelectDiagram(Diagram::LuoShu) => write!(f, "diagram:luoshu"),
            Intent::SelectMode(mode) => write!(f, "{mode}"),
            Intent::ToggleRun => write!(f, "toggle-run"),
            Intent::ToggleRotate => write!(f, "toggle-rotate"),
            Intent::Reset => write!(f, "reset"),
            Intent::ToggleLayer(layers) => {
                let names: Vec<String> = layers
                    .iter_names()
                    .map(|(name, _)| name.to_lowercase())
                    .collect();
                write!(f, "layer:{}", names.join("|"))
            }
        }
    }
}

impl FromStr for Intent {
    type Err = DiagramError;

    /// Parse intents such as `galaxy`, `toggle-run`, `diagram:luoshu` or `layer:dots|lines`
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_lowercase();
        let unknown = || DiagramError::ParseIntent(s.to_string());

        if let Some((kind, arg)) = text.split_once(':') {
            return match kind {
                "diagram" => Diagram::from_name(arg)
                    .map(Intent::SelectDiagram)
                    .ok_or_else(unknown),
                "mode" => Mode::from_name(arg)
                    .map(Intent::SelectMode)
                    .ok_or_else(unknown),
                "layer" | "toggle-layer" => arg
                    .split('|')
                    .try_fold(Layers::empty(), |layers, name| {
                        Layers::from_name(&name.trim().to_uppercase()).map(|flag| layers | flag)
                    })
                    .map(Intent::ToggleLayer)
                    .ok_or_else(unknown),
                _ => Err(unknown()),
            };
        }

        match text.replace('_', "-").as_str() {
            "toggle-run" | "run" | "pause" => Ok(Intent::ToggleRun),
            "toggle-rotate" | "rotate" => Ok(Intent::ToggleRotate),
            "reset" => Ok(Intent::Reset),
            other => Mode::from_name(other)
                .map(Intent::SelectMode)
                .or_else(|| Diagram::from_name(other).map(Intent::SelectDiagram))
                .ok_or_else(unknown),
        }
    }
}

/// One rendered dot
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FramePoint {
    pub id: String,
    pub value: u8,
    pub position: Vec3,
}

/// One rendered polyline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FramePath {
    pub name: String,
    pub points: Vec<Vec3>,
}

/// Snapshot of the active diagram handed to a renderer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    pub diagram: Diagram,
    /// He Tu phase or Luo Shu morph name
    pub phase: String,
    /// Whether the diagram's own clock is advancing
    pub running: bool,
    /// Luo Shu sphere rotation; always false for He Tu
    pub rotating: bool,
    pub blends: BTreeMap<String, f32>,
    pub layers: Layers,
    pub points: Vec<FramePoint>,
    pub paths: Vec<FramePath>,
    /// Energy pulse on the Luo Shu circuit while the flow runs
    pub flow_marker: Option<Vec3>,
}

/// Both diagrams plus the selection and layer state
#[derive(Debug, Clone)]
pub struct Scene {
    settings: AnimationSettings,
    diagram: Diagram,
    layers: Layers,
    hetu: HeTuAnimator,
    luoshu: LuoShuAnimator,
}

impl Scene {
    /// Build both diagrams with the given settings
    pub fn new(settings: AnimationSettings) -> Result<Self> {
        settings.validate()?;
        let hetu = HeTuAnimator::new(&settings)?;
        let luoshu = LuoShuAnimator::new(&settings)?;
        Ok(Self {
            settings,
            diagram: Diagram::HeTu,
            layers: Layers::default(),
            hetu,
            luoshu,
        })
    }

    /// Handle one user intent
    ///
    /// Selecting a mode of the hidden diagram is an error; intents that do
    /// not apply in the current state are ignored.
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        debug!("Scene intent {} on {}", intent, self.diagram);
        match intent {
            Intent::SelectDiagram(diagram) => self.diagram = diagram,
            Intent::SelectMode(mode) => {
                if mode.diagram() != self.diagram {
                    return Err(DiagramError::ModeNotSupported {
                        mode: mode.name().to_string(),
                        diagram: self.diagram.name().to_string(),
                    });
                }
                match mode {
                    Mode::Galaxy => {
                        self.hetu.apply(HeTuIntent::Select(HeTuFamily::Galaxy));
                    }
                    Mode::Helix => {
                        self.hetu.apply(HeTuIntent::Select(HeTuFamily::Helix));
                    }
                    Mode::Plane => {
                        self.luoshu.apply(LuoShuIntent::Select(LuoShuMorph::Plane));
                    }
                    Mode::Sphere => {
                        self.luoshu.apply(LuoShuIntent::Select(LuoShuMorph::Sphere));
                    }
                    Mode::Projection => {
                        self.luoshu
                            .apply(LuoShuIntent::Select(LuoShuMorph::Projection));
                    }
                }
            }
            Intent::ToggleRun => match self.diagram {
                Diagram::HeTu => {
                    self.hetu.apply(HeTuIntent::ToggleRun);
                }
                Diagram::LuoShu => {
                    self.luoshu.apply(LuoShuIntent::ToggleRun);
                }
            },
            Intent::ToggleRotate => {
                if self.diagram == Diagram::LuoShu {
                    self.luoshu.apply(LuoShuIntent::ToggleRotate);
                }
            }
            Intent::Reset => match self.diagram {
                Diagram::HeTu => {
                    self.hetu.apply(HeTuIntent::Reset);
                }
                Diagram::LuoShu => {
                    self.luoshu.apply(LuoShuIntent::Reset);
                }
            },
            Intent::ToggleLayer(layers) => self.layers.toggle(layers),
        }
        Ok(())
    }

    /// Advance both diagrams by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.hetu.update(dt);
        self.luoshu.update(dt);
    }

    /// Active diagram
    pub fn diagram(&self) -> Diagram {
        self.diagram
    }

    /// Visible layers
    pub fn layers(&self) -> Layers {
        self.layers
    }

    /// Settings both diagrams were built with
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// He Tu driver, updated even while hidden
    pub fn hetu(&self) -> &HeTuAnimator {
        &self.hetu
    }

    /// Luo Shu driver, updated even while hidden
    pub fn luoshu(&self) -> &LuoShuAnimator {
        &self.luoshu
    }

    /// Positions of the active diagram, indexed like its catalog
    pub fn positions(&self) -> &[Vec3] {
        match self.diagram {
            Diagram::HeTu => self.hetu.positions(),
            Diagram::LuoShu => self.luoshu.positions(),
        }
    }

    /// Snapshot the active diagram
    pub fn frame(&self) -> Frame {
        match self.diagram {
            Diagram::HeTu => self.hetu_frame(),
            Diagram::LuoShu => self.luoshu_frame(),
        }
    }

    fn hetu_frame(&self) -> Frame {
        let hetu = &self.hetu;
        Frame {
            diagram: Diagram::HeTu,
            phase: hetu.phase().name().to_string(),
            running: hetu.machine().advances_clock(),
            rotating: false,
            blends: BTreeMap::from([
                ("galaxy".to_string(), hetu.galaxy_blend()),
                ("helix".to_string(), hetu.helix_blend()),
            ]),
            layers: self.layers,
            points: frame_points(hetu.catalog().points(), hetu.positions()),
            paths: hetu
                .traversals()
                .iter()
                .zip(hetu.paths())
                .map(|(traversal, points)| FramePath {
                    name: traversal.name.to_string(),
                    points: points.clone(),
                })
                .collect(),
            flow_marker: None,
        }
    }

    fn luoshu_frame(&self) -> Frame {
        let luoshu = &self.luoshu;
        let state = luoshu.state();
        Frame {
            diagram: Diagram::LuoShu,
            phase: state.morph.name().to_string(),
            running: state.flow_running,
            rotating: state.rotating,
            blends: BTreeMap::from([
                ("sphere".to_string(), luoshu.sphere_blend()),
                ("projection".to_string(), luoshu.projection_blend()),
            ]),
            layers: self.layers,
            points: frame_points(luoshu.catalog().points(), luoshu.positions()),
            paths: vec![FramePath {
                name: "circuit".to_string(),
                points: luoshu.circuit_points().to_vec(),
            }],
            flow_marker: luoshu.flow_marker(),
        }
    }
}

fn frame_points<P: GroupedPoint>(points: &[P], positions: &[Vec3]) -> Vec<FramePoint> {
    points
        .iter()
        .zip(positions)
        .map(|(point, &position)| FramePoint {
            id: point.id().to_string(),
            value: point.value(),
            position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::HeTuPhase;

    fn scene() -> Scene {
        Scene::new(AnimationSettings::default()).unwrap()
    }

    fn run(scene: &mut Scene, seconds: f32) {
        for _ in 0..(seconds * 60.0) as usize {
            scene.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_parse_intents() {
        assert_eq!("galaxy".parse(), Ok(Intent::SelectMode(Mode::Galaxy)));
        assert_eq!("Toggle_Run".parse(), Ok(Intent::ToggleRun));
        assert_eq!("reset".parse(), Ok(Intent::Reset));
        assert_eq!(
            "diagram:luo-shu".parse(),
            Ok(Intent::SelectDiagram(Diagram::LuoShu))
        );
        assert_eq!("luoshu".parse(), Ok(Intent::SelectDiagram(Diagram::LuoShu)));
        assert_eq!("layer:lines".parse(), Ok(Intent::ToggleLayer(Layers::LINES)));
        assert_eq!(
            "warp".parse::<Intent>(),
            Err(DiagramError::ParseIntent("warp".to_string()))
        );
        assert!("layer:sparkles".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_display_parses_back() {
        for intent in [
            Intent::SelectDiagram(Diagram::LuoShu),
            Intent::SelectMode(Mode::Projection),
            Intent::ToggleRotate,
            Intent::ToggleLayer(Layers::TRIGRAMS),
            Intent::ToggleLayer(Layers::DOTS | Layers::LINES),
            Intent::ToggleLayer(Layers::all()),
        ] {
            assert_eq!(intent.to_string().parse(), Ok(intent));
        }
    }

    #[test]
    fn test_parse_combined_layers() {
        let intent = Intent::ToggleLayer(Layers::DOTS | Layers::LINES);
        assert_eq!(intent.to_string(), "layer:dots|lines");
        assert_eq!("layer:dots|lines".parse(), Ok(intent));
        assert_eq!(
            "toggle-layer: numbers | directions".parse(),
            Ok(Intent::ToggleLayer(Layers::NUMBERS | Layers::DIRECTIONS))
        );
        assert!("layer:dots|".parse::<Intent>().is_err());
        assert!("layer:dots|sparkles".parse::<Intent>().is_err());
        assert!("layer:".parse::<Intent>().is_err());
    }

    #[test]
    fn test_mode_of_hidden_diagram_is_rejected() {
        let mut scene = scene();
        let err = scene.apply(Intent::SelectMode(Mode::Sphere)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mode sphere is not available for the He Tu diagram"
        );

        scene.apply(Intent::SelectDiagram(Diagram::LuoShu)).unwrap();
        assert!(scene.apply(Intent::SelectMode(Mode::Sphere)).is_ok());
        assert!(scene.apply(Intent::SelectMode(Mode::Helix)).is_err());
    }

    #[test]
    fn test_rotate_is_ignored_for_hetu() {
        let mut scene = scene();
        scene.apply(Intent::ToggleRotate).unwrap();
        assert!(!scene.luoshu().state().rotating);
    }

    #[test]
    fn test_layers_toggle() {
        let mut scene = scene();
        assert_eq!(scene.layers(), Layers::all());
        scene.apply(Intent::ToggleLayer(Layers::LINES)).unwrap();
        assert!(!scene.layers().contains(Layers::LINES));
        scene.apply(Intent::ToggleLayer(Layers::LINES)).unwrap();
        assert!(scene.layers().contains(Layers::LINES));
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut scene = scene();
        scene.apply(Intent::SelectMode(Mode::Galaxy)).unwrap();
        scene.update(f32::NAN);
        scene.update(-1.0);
        scene.update(f32::INFINITY);
        assert_eq!(scene.hetu().clock(), 0.0);
        assert_eq!(scene.hetu().phase(), HeTuPhase::Morphing);
    }

    #[test]
    fn test_reset_returns_to_static_layout() {
        let mut scene = scene();
        scene.apply(Intent::SelectMode(Mode::Helix)).unwrap();
        run(&mut scene, 3.0);
        scene.apply(Intent::Reset).unwrap();
        run(&mut scene, 5.0);

        assert_eq!(scene.hetu().phase(), HeTuPhase::Static);
        assert_eq!(scene.hetu().clock(), 0.0);
        for (position, point) in scene.positions().iter().zip(scene.hetu().catalog().points()) {
            assert_eq!(*position, point.position);
        }
    }

    #[test]
    fn test_hidden_diagram_keeps_animating() {
        let mut scene = scene();
        scene.apply(Intent::SelectMode(Mode::Galaxy)).unwrap();
        scene.apply(Intent::SelectDiagram(Diagram::LuoShu)).unwrap();
        run(&mut scene, 2.0);
        assert_eq!(scene.hetu().phase(), HeTuPhase::Running);
        assert!(scene.hetu().clock() > 1.9);
    }

    #[test]
    fn test_luoshu_frame() {
        let mut scene = scene();
        scene.apply(Intent::SelectDiagram(Diagram::LuoShu)).unwrap();
        scene.apply(Intent::ToggleRun).unwrap();
        run(&mut scene, 0.5);

        let frame = scene.frame();
        assert_eq!(frame.diagram, Diagram::LuoShu);
        assert_eq!(frame.phase, "PLANE");
        assert!(frame.running);
        assert_eq!(frame.points.len(), 45);
        assert_eq!(frame.paths.len(), 1);
        assert!(frame.flow_marker.is_some());
        assert_eq!(frame.blends["sphere"], 0.0);
    }
}
