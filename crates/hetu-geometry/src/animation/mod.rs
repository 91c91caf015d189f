//! Diagram animation
//!
//! This module provides the per-frame half of the engine:
//! - Blending static positions toward time-evolved mode positions
//! - Parameter-space sampling of line segments between dots
//! - Spherical interpolation with degenerate-angle fallbacks
//! - Damped blend factors
//! - The He Tu and Luo Shu state machines
//!
//! # Example
//!
//! ```rust
//! use hetu_geometry::animation::{DampedScalar, HeTuFamily, HeTuIntent, HeTuStateMachine};
//!
//! let mut machine = HeTuStateMachine::new(1.0);
//! let mut blend = DampedScalar::new(0.0, 4.0);
//!
//! machine.apply(HeTuIntent::Select(HeTuFamily::Galaxy));
//! for _ in 0..90 {
//!     machine.tick(1.0 / 60.0);
//!     blend.set_target(machine.blend_target(HeTuFamily::Galaxy));
//!     blend.update(1.0 / 60.0);
//! }
//! assert!(machine.is_running());
//! assert!(blend.value() > 0.9);
//! ```

mod blend;
mod damping;
mod interpolation;
mod state;
mod types;

pub use blend::{blend_position, compose_position};
pub use damping::{DampedScalar, SNAP_EPSILON, damp};
pub use interpolation::{
    SLERP_EPSILON, SegmentEnd, sample_between, sample_fraction, sample_segment, slerp_direction,
    slerp_on_sphere,
};
pub use state::{
    DEFAULT_MORPH_DURATION, HeTuFamily, HeTuIntent, HeTuPhase, HeTuStateMachine, LuoShuIntent,
    LuoShuMorph, LuoShuState,
};
pub use types::Lerp;
