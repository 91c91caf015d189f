//! Traversal ordering of catalog points
//!
//! The order produced here is the single source of truth for both the line
//! geometry and the placement of points along spiral arms and helix strands.

use std::cmp::Ordering;

use crate::error::{DiagramError, Result};
use crate::types::{GroupedPoint, PointIndex};

/// Odd (yang) traversal: north, east, south, west on the heaven face
pub const ODD_SEQUENCE: [u8; 4] = [1, 3, 7, 9];

/// Even (yin) traversal: south, west, north, east on the earth face
pub const EVEN_SEQUENCE: [u8; 4] = [2, 4, 6, 8];

/// Groups whose dots are visited in descending identifier order
///
/// Their rows are laid out against the direction of travel, so reading them
/// backwards keeps the traversal spatially continuous.
pub const DESCENDING_GROUPS: [u8; 3] = [4, 6, 9];

/// Check whether a group is walked in descending identifier order
pub fn is_descending(value: u8) -> bool {
    DESCENDING_GROUPS.contains(&value)
}

/// Order points by their group's rank in `sequence`, then by identifier
///
/// Points of groups not listed in `sequence` are dropped. Inside a group the
/// identifiers ascend, except for [`DESCENDING_GROUPS`].
///
/// Returns an error if `sequence` repeats a value or names a group with no
/// points.
pub fn sort_by_group_sequence<P: GroupedPoint>(
    points: &[P],
    sequence: &[u8],
) -> Result<Vec<PointIndex>> {
    for (i, value) in sequence.iter().enumerate() {
        if sequence[..i].contains(value) {
            return Err(DiagramError::DuplicateSequenceGroup(*value));
        }
        if !points.iter().any(|p| p.value() == *value) {
            return Err(DiagramError::UnknownGroup(*value));
        }
    }

    let rank = |value: u8| sequence.iter().position(|&v| v == value);

    let mut selected: Vec<(usize, PointIndex)> = points
        .iter()
        .enumerate()
        .filter_map(|(index, p)| rank(p.value()).map(|r| (r, index)))
        .collect();

    selected.sort_by(|&(rank_a, a), &(rank_b, b)| {
        rank_a
            .cmp(&rank_b)
            .then_with(|| compare_in_group(&points[a], &points[b]))
    });

    Ok(selected.into_iter().map(|(_, index)| index).collect())
}

fn compare_in_group<P: GroupedPoint>(a: &P, b: &P) -> Ordering {
    let ascending = a.id().cmp(b.id());
    if is_descending(a.value()) {
        ascending.reverse()
    } else {
        ascending
    }
}
