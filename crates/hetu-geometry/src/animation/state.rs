//! Animation state machines
//!
//! The He Tu machine has time-boxed morphs. Rather than scheduling deferred
//! callbacks, it keeps a single authoritative pending transition that is
//! checked against the clock once per frame. Any new transition replaces the
//! pending one, and the pending one only fires if the machine is still in
//! the phase it was armed from.

use std::fmt;

use log::debug;

/// Default duration of a morph or return, seconds
pub const DEFAULT_MORPH_DURATION: f64 = 1.0;

/// Animated mode family of the He Tu diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeTuFamily {
    Galaxy,
    Helix,
}

/// Phase of the He Tu animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeTuPhase {
    Static,
    Morphing,
    Running,
    Paused,
    HelixMorphing,
    HelixRunning,
    HelixPaused,
    Returning,
}

impl HeTuPhase {
    /// Mode family this phase belongs to, if any
    pub fn family(&self) -> Option<HeTuFamily> {
        match self {
            HeTuPhase::Morphing | HeTuPhase::Running | HeTuPhase::Paused => {
                Some(HeTuFamily::Galaxy)
            }
            HeTuPhase::HelixMorphing | HeTuPhase::HelixRunning | HeTuPhase::HelixPaused => {
                Some(HeTuFamily::Helix)
            }
            HeTuPhase::Static | HeTuPhase::Returning => None,
        }
    }

    /// Upper-case phase name
    pub fn name(&self) -> &'static str {
        match self {
            HeTuPhase::Static => "STATIC",
            HeTuPhase::Morphing => "MORPHING",
            HeTuPhase::Running => "RUNNING",
            HeTuPhase::Paused => "PAUSED",
            HeTuPhase::HelixMorphing => "HELIX_MORPHING",
            HeTuPhase::HelixRunning => "HELIX_RUNNING",
            HeTuPhase::HelixPaused => "HELIX_PAUSED",
            HeTuPhase::Returning => "RETURNING",
        }
    }
}

impl fmt::Display for HeTuPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User intents understood by the He Tu machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeTuIntent {
    Select(HeTuFamily),
    ToggleRun,
    Reset,
}

/// Transition armed to fire at a deadline
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    from: HeTuPhase,
    to: HeTuPhase,
    deadline: f64,
}

/// He Tu animation state machine
#[derive(Debug, Clone)]
pub struct HeTuStateMachine {
    phase: HeTuPhase,
    pending: Option<Pending>,
    /// Seconds since creation
    now: f64,
    morph_duration: f64,
    /// Family started by a bare toggle-run from STATIC
    last_family: HeTuFamily,
}

impl HeTuStateMachine {
    /// Create a machine resting in STATIC
    pub fn new(morph_duration: f64) -> Self {
        Self {
            phase: HeTuPhase::Static,
            pending: None,
            now: 0.0,
            morph_duration,
            last_family: HeTuFamily::Galaxy,
        }
    }

    /// Current phase
    pub fn phase(&self) -> HeTuPhase {
        self.phase
    }

    /// Seconds elapsed on the machine's clock
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Deadline of the armed auto-advance, if any
    pub fn deadline(&self) -> Option<f64> {
        self.pending.map(|p| p.deadline)
    }

    /// Check if the animation clock should advance
    pub fn advances_clock(&self) -> bool {
        matches!(
            self.phase,
            HeTuPhase::Morphing
                | HeTuPhase::Running
                | HeTuPhase::HelixMorphing
                | HeTuPhase::HelixRunning
        )
    }

    /// Check if a running phase is settled
    pub fn is_running(&self) -> bool {
        matches!(self.phase, HeTuPhase::Running | HeTuPhase::HelixRunning)
    }

    /// Check if the animation is paused
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, HeTuPhase::Paused | HeTuPhase::HelixPaused)
    }

    /// Blend target for a family: 1 while the phase belongs to it
    pub fn blend_target(&self, family: HeTuFamily) -> f32 {
        if self.phase.family() == Some(family) {
            1.0
        } else {
            0.0
        }
    }

    fn enter(&mut self, phase: HeTuPhase, settle_to: Option<HeTuPhase>) {
        debug!("He Tu {} -> {} at {:.3}s", self.phase, phase, self.now);
        self.phase = phase;
        self.pending = settle_to.map(|to| Pending {
            from: phase,
            to,
            deadline: self.now + self.morph_duration,
        });
    }

    fn begin_morph(&mut self, family: HeTuFamily) {
        self.last_family = family;
        match family {
            HeTuFamily::Galaxy => self.enter(HeTuPhase::Morphing, Some(HeTuPhase::Running)),
            HeTuFamily::Helix => {
                self.enter(HeTuPhase::HelixMorphing, Some(HeTuPhase::HelixRunning))
            }
        }
    }

    /// Apply an intent, returning whether the phase changed
    pub fn apply(&mut self, intent: HeTuIntent) -> bool {
        use HeTuPhase::*;

        match (self.phase, intent) {
            (Static | Returning, HeTuIntent::Select(family)) => self.begin_morph(family),
            (Morphing | Running | Paused, HeTuIntent::Select(HeTuFamily::Helix)) => {
                self.begin_morph(HeTuFamily::Helix)
            }
            (HelixMorphing | HelixRunning | HelixPaused, HeTuIntent::Select(HeTuFamily::Galaxy)) => {
                self.begin_morph(HeTuFamily::Galaxy)
            }
            (Static, HeTuIntent::ToggleRun) => self.begin_morph(self.last_family),
            (Running, HeTuIntent::ToggleRun) => self.enter(Paused, None),
            (Paused, HeTuIntent::ToggleRun) => self.enter(Running, None),
            (HelixRunning, HeTuIntent::ToggleRun) => self.enter(HelixPaused, None),
            (HelixPaused, HeTuIntent::ToggleRun) => self.enter(HelixRunning, None),
            (
                Morphing | Running | Paused | HelixMorphing | HelixRunning | HelixPaused,
                HeTuIntent::Reset,
            ) => self.enter(Returning, Some(Static)),
            _ => {
                debug!("He Tu ignores {:?} in {}", intent, self.phase);
                return false;
            }
        }
        true
    }

    /// Advance the clock and fire the pending transition if it is due
    ///
    /// Returns the phase entered by an auto-advance.
    pub fn tick(&mut self, dt: f64) -> Option<HeTuPhase> {
        self.now += dt.max(0.0);

        let pending = self.pending?;
        if self.now < pending.deadline {
            return None;
        }
        self.pending = None;

        if self.phase != pending.from {
            debug!(
                "Discarding stale {} -> {} (now {})",
                pending.from, pending.to, self.phase
            );
            return None;
        }
        self.enter(pending.to, None);
        Some(pending.to)
    }
}

impl Default for HeTuStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_MORPH_DURATION)
    }
}

/// Target layout of the Luo Shu diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LuoShuMorph {
    Plane,
    Sphere,
    Projection,
}

impl LuoShuMorph {
    /// Upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            LuoShuMorph::Plane => "PLANE",
            LuoShuMorph::Sphere => "SPHERE",
            LuoShuMorph::Projection => "PROJECTION",
        }
    }
}

impl fmt::Display for LuoShuMorph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User intents understood by the Luo Shu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuoShuIntent {
    Select(LuoShuMorph),
    ToggleRun,
    ToggleRotate,
    Reset,
}

/// Luo Shu state: a morph target plus two independent switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuoShuState {
    pub morph: LuoShuMorph,
    /// Energy pulse travelling along the circuit
    pub flow_running: bool,
    /// Sphere spinning about the y axis
    pub rotating: bool,
}

impl LuoShuState {
    /// Apply an intent, returning whether the state changed
    pub fn apply(&mut self, intent: LuoShuIntent) -> bool {
        let before = *self;
        match intent {
            LuoShuIntent::Select(morph) => self.morph = morph,
            LuoShuIntent::ToggleRun => self.flow_running = !self.flow_running,
            LuoShuIntent::ToggleRotate => self.rotating = !self.rotating,
            LuoShuIntent::Reset => *self = Self::default(),
        }
        let changed = before != *self;
        if changed {
            debug!("Luo Shu {:?} -> {:?}", before, self);
        }
        changed
    }

    /// Blend target between the flat grid and the sphere
    pub fn sphere_target(&self) -> f32 {
        match self.morph {
            LuoShuMorph::Plane => 0.0,
            LuoShuMorph::Sphere | LuoShuMorph::Projection => 1.0,
        }
    }

    /// Blend target between the sphere and its flattened projection
    pub fn projection_target(&self) -> f32 {
        match self.morph {
            LuoShuMorph::Projection => 1.0,
            LuoShuMorph::Plane | LuoShuMorph::Sphere => 0.0,
        }
    }
}

impl Default for LuoShuState {
    fn default() -> Self {
        Self {
            morph: LuoShuMorph::Plane,
            flow_running: false,
            rotating: false,
        }
    }
}
