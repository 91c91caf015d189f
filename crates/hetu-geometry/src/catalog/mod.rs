//! Canonical point catalogs
//!
//! Each diagram is generated once from fixed constants into an index-stable
//! arena. Everything downstream (sorter, mode maps, blend engine) addresses
//! points by [`PointIndex`] into that arena; identifiers are kept for display
//! and for the in-group ordering rule.

mod hetu;
mod luoshu;

use std::collections::{BTreeMap, HashSet};

use crate::error::{DiagramError, Result};
use crate::types::{GroupedPoint, PointIndex};

pub use hetu::{
    CUBE_HALF, CUBE_SIZE, DOT_SPACING, FACE_MARGIN, HeTuPoint, PIVOT_ROW_OFFSET,
    generate_hetu_catalog,
};
pub use luoshu::{
    DOT_GAP, GRID_SPACING, LuoShuPoint, SPHERE_RADIUS, generate_luoshu_catalog, grid_anchor,
    tally_pattern,
};

/// He Tu catalog: 55 points in groups 1 to 10
pub type HeTuCatalog = Catalog<HeTuPoint>;

/// Luo Shu catalog: 45 points in groups 1 to 9
pub type LuoShuCatalog = Catalog<LuoShuPoint>;

/// Immutable arena of generated points
#[derive(Debug, Clone)]
pub struct Catalog<P> {
    points: Vec<P>,
}

impl<P: GroupedPoint> Catalog<P> {
    pub(crate) fn from_points(points: Vec<P>) -> Self {
        Self { points }
    }

    /// All points in arena order
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the catalog holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at an arena index
    pub fn get(&self, index: PointIndex) -> Option<&P> {
        self.points.get(index)
    }

    /// Resolve an identifier to its arena index
    pub fn index_of(&self, id: &str) -> Result<PointIndex> {
        self.points
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| DiagramError::UnknownPoint(id.to_string()))
    }

    /// Iterate the points of one group together with their indices
    pub fn group(&self, value: u8) -> impl Iterator<Item = (PointIndex, &P)> {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.value() == value)
    }

    /// Number of points per group value
    pub fn group_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for point in &self.points {
            *counts.entry(point.value()).or_insert(0) += 1;
        }
        counts
    }

    /// Check that every group holds `expected(value)` points and identifiers are unique
    pub(crate) fn validate_with(&self, values: &[u8], expected: impl Fn(u8) -> usize) -> Result<()> {
        let counts = self.group_counts();
        for &value in values {
            let found = counts.get(&value).copied().unwrap_or(0);
            if found != expected(value) {
                return Err(DiagramError::CardinalityMismatch {
                    value,
                    expected: expected(value),
                    found,
                });
            }
        }

        if let Some(&stray) = counts.keys().find(|v| !values.contains(v)) {
            return Err(DiagramError::UnknownGroup(stray));
        }

        let mut seen = HashSet::with_capacity(self.points.len());
        for point in &self.points {
            if !seen.insert(point.id()) {
                return Err(DiagramError::DuplicateIdentifier(point.id().to_string()));
            }
        }

        Ok(())
    }
}

impl HeTuCatalog {
    /// Re-check the traditional cardinalities (group n holds n points)
    pub fn validate(&self) -> Result<()> {
        let values: Vec<u8> = (1..=10).collect();
        self.validate_with(&values, usize::from)
    }
}

impl LuoShuCatalog {
    /// Re-check the traditional cardinalities (group n holds n points)
    pub fn validate(&self) -> Result<()> {
        let values: Vec<u8> = (1..=9).collect();
        self.validate_with(&values, usize::from)
    }
}
