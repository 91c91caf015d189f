//! Mode coordinate generators
//!
//! Pure functions that turn a catalog plus its traversal order into per-point
//! polar/conical parameters, and the two Luo Shu generators that work on
//! anchors instead of single points (sphere placement, energy circuit).

pub mod circuit;
mod config;
pub mod galaxy;
pub mod helix;
pub mod sphere;

pub use circuit::{CircuitPath, CircuitSample, DEFAULT_CIRCUIT_ORDER};
pub use config::{ModeConfig, ModeMap, PositionKind, Spin, Vertical};
pub use galaxy::generate_galaxy_map;
pub use helix::generate_helix_map;

use crate::catalog::Catalog;
use crate::error::{DiagramError, Result};
use crate::types::{GroupedPoint, PointIndex};

/// Group whose points keep their own polar coordinates at the centre
pub const CORE_GROUP: u8 = 5;
/// Group whose points form the small ring around the core
pub const RING_GROUP: u8 = 10;

/// Pair each traversal entry with the step that leads to it
///
/// The first entry gets a zero step. Later entries get `same` while they stay
/// in the group of their predecessor and `new` when they enter another one.
pub(crate) fn group_steps<'a, P: GroupedPoint>(
    catalog: &'a Catalog<P>,
    order: &'a [PointIndex],
    same: f32,
    new: f32,
) -> impl Iterator<Item = (PointIndex, f32)> + 'a {
    order.iter().enumerate().map(move |(i, &index)| {
        let step = match i.checked_sub(1).map(|prev| order[prev]) {
            None => 0.0,
            Some(prev) => {
                let same_group = catalog
                    .get(prev)
                    .zip(catalog.get(index))
                    .is_some_and(|(a, b)| a.value() == b.value());
                if same_group { same } else { new }
            }
        };
        (index, step)
    })
}

/// Turn a partially filled config table into a [`ModeMap`]
pub(crate) fn collect_map<P: GroupedPoint>(
    catalog: &Catalog<P>,
    configs: Vec<Option<ModeConfig>>,
) -> Result<ModeMap> {
    configs
        .into_iter()
        .zip(catalog.points())
        .map(|(config, point)| {
            config.ok_or_else(|| DiagramError::UnmappedPoint(point.id().to_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(ModeMap::new)
}
