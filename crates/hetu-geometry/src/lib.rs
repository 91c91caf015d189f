//! Geometry and animation engine for the He Tu and Luo Shu diagrams.
//!
//! The crate generates the point catalogs of both diagrams, derives per-point
//! polar configurations for the He Tu galaxy and helix modes, maps the
//! Luo Shu grid onto a sphere, and drives it all frame by frame through a
//! damped blend between static and animated layouts.
//!
//! Layers, leaf first:
//! - [`catalog`]: point generators and the index-stable point arena
//! - [`sequence`]: ordering points along the odd and even traversals
//! - [`modes`]: galaxy, helix, sphere and circuit generators
//! - [`animation`]: blending, interpolation, damping and state machines
//! - [`scene`]: the renderer-facing driver
//!
//! # Examples
//!
//! ```
//! use hetu_geometry::{AnimationSettings, Diagram, Intent, Mode, Scene};
//!
//! let mut scene = Scene::new(AnimationSettings::default())?;
//! scene.apply(Intent::SelectDiagram(Diagram::LuoShu))?;
//! scene.apply(Intent::SelectMode(Mode::Sphere))?;
//! for _ in 0..300 {
//!     scene.update(1.0 / 60.0);
//! }
//!
//! let frame = scene.frame();
//! assert_eq!(frame.phase, "SPHERE");
//! assert_eq!(frame.blends["sphere"], 1.0);
//! # Ok::<(), hetu_geometry::DiagramError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod animation;
pub mod catalog;
pub mod error;
pub mod modes;
pub mod scene;
pub mod sequence;
pub mod settings;
pub mod types;

// Re-export common types
pub use catalog::{
    Catalog, HeTuCatalog, HeTuPoint, LuoShuCatalog, LuoShuPoint, generate_hetu_catalog,
    generate_luoshu_catalog,
};
pub use error::{DiagramError, Result};
pub use modes::{CircuitPath, ModeConfig, ModeMap};
pub use scene::{Frame, FramePath, FramePoint, Intent, Layers, Scene};
pub use sequence::sort_by_group_sequence;
pub use settings::AnimationSettings;
pub use types::{Diagram, GroupedPoint, Mode, PointIndex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
