//! Luo Shu grid and sphere layouts
//!
//! The flat layout is the magic square with south at the top:
//!
//! ```text
//! 4 9 2
//! 3 5 7
//! 8 1 6
//! ```
//!
//! Each group is drawn as a tally glyph of `n` dots around its anchor. On
//! the sphere the same glyph is laid in the tangent plane at the group's
//! anchor direction (see [`crate::modes::sphere`]).

use std::f32::consts::{FRAC_PI_6, TAU};

use log::info;

use super::LuoShuCatalog;
use crate::modes::sphere::project_onto_sphere;
use crate::types::{Direction, GroupSymbol, GroupedPoint, Polarity, Trigram, Vec2, Vec3};

/// Distance between neighbouring cells of the flat grid
pub const GRID_SPACING: f32 = 3.0;
/// Radius of the sphere layout
pub const SPHERE_RADIUS: f32 = 5.0;
/// Base pitch of the tally glyphs
pub const DOT_GAP: f32 = 0.35;

/// A dot of the Luo Shu diagram
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuoShuPoint {
    pub id: String,
    pub value: u8,
    pub polarity: Polarity,
    /// Offset of the dot inside its group glyph
    pub local_offset: Vec2,
    /// Position on the flat grid (z = 0)
    pub plane_position: Vec3,
    /// Position on the sphere layout
    pub sphere_position: Vec3,
    /// Trigram and direction, present on the first dot of each outer group
    pub symbol: Option<GroupSymbol>,
}

impl GroupedPoint for LuoShuPoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> u8 {
        self.value
    }
}

/// Centre of a group's cell on the flat grid
pub fn grid_anchor(value: u8) -> Option<Vec3> {
    let (col, row) = match value {
        4 => (-1.0, 1.0),
        9 => (0.0, 1.0),
        2 => (1.0, 1.0),
        3 => (-1.0, 0.0),
        5 => (0.0, 0.0),
        7 => (1.0, 0.0),
        8 => (-1.0, -1.0),
        1 => (0.0, -1.0),
        6 => (1.0, -1.0),
        _ => return None,
    };
    Some(Vec3::new(col * GRID_SPACING, row * GRID_SPACING, 0.0))
}

fn group_symbol(value: u8) -> Option<GroupSymbol> {
    let (trigram, direction) = match value {
        1 => (Trigram::Kan, Direction::North),
        2 => (Trigram::Kun, Direction::Southwest),
        3 => (Trigram::Zhen, Direction::East),
        4 => (Trigram::Xun, Direction::Southeast),
        6 => (Trigram::Qian, Direction::Northwest),
        7 => (Trigram::Dui, Direction::West),
        8 => (Trigram::Gen, Direction::Northeast),
        9 => (Trigram::Li, Direction::South),
        _ => return None,
    };
    Some(GroupSymbol { trigram, direction })
}

fn ring(count: usize, radius: f32, rotation: f32) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| {
        let angle = rotation + TAU * i as f32 / count as f32;
        Vec2::new(radius * angle.cos(), radius * angle.sin())
    })
}

/// Local 2D offsets of the tally glyph for a group
///
/// Returns an empty pattern for values outside 1..=9.
pub fn tally_pattern(value: u8) -> Vec<Vec2> {
    let g = DOT_GAP;
    match value {
        1 => vec![Vec2::ZERO],
        2 => vec![Vec2::new(-0.5 * g, 0.0), Vec2::new(0.5 * g, 0.0)],
        3 => vec![Vec2::new(-g, 0.0), Vec2::ZERO, Vec2::new(g, 0.0)],
        4 => vec![
            Vec2::new(0.0, g),
            Vec2::new(g, 0.0),
            Vec2::new(0.0, -g),
            Vec2::new(-g, 0.0),
        ],
        5 => {
            let arm = 0.6 * g;
            vec![
                Vec2::ZERO,
                Vec2::new(0.0, arm),
                Vec2::new(arm, 0.0),
                Vec2::new(0.0, -arm),
                Vec2::new(-arm, 0.0),
            ]
        }
        6 => ring(6, g, FRAC_PI_6).collect(),
        7 => ring(6, g, FRAC_PI_6).chain(std::iter::once(Vec2::ZERO)).collect(),
        8 => ring(8, 1.2 * g, 0.0).collect(),
        9 => (0..9)
            .map(|i| {
                let col = (i % 3) as f32 - 1.0;
                let row = 1.0 - (i / 3) as f32;
                Vec2::new(col * g, row * g)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Generate the canonical Luo Shu catalog
pub fn generate_luoshu_catalog() -> LuoShuCatalog {
    let mut points = Vec::with_capacity(45);

    for value in 1..=9u8 {
        let Some(anchor) = grid_anchor(value) else {
            continue;
        };
        for (index, offset) in tally_pattern(value).into_iter().enumerate() {
            points.push(LuoShuPoint {
                id: format!("luoshu-{value}-{index:02}"),
                value,
                polarity: Polarity::of(value),
                local_offset: offset,
                plane_position: anchor + offset.extend(0.0),
                sphere_position: project_onto_sphere(value, offset),
                symbol: if index == 0 { group_symbol(value) } else { None },
            });
        }
    }

    info!("Generated Luo Shu catalog with {} points", points.len());
    LuoShuCatalog::from_points(points)
}
