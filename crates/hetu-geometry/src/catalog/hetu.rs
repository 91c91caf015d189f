//! He Tu cube-face layout
//!
//! Odd groups sit on the heaven face (top of the cube), even groups on the
//! earth face (bottom), and the centre groups 5 and 10 on the pivot layer at
//! y = 0. Looking down the y axis, north is -z, south is +z, east is -x and
//! west is +x. North/south rows run along x, east/west rows along z, and the
//! in-group index always grows along the row's positive axis.

use log::info;

use super::HeTuCatalog;
use crate::types::{Face, GroupedPoint, Polarity, Vec3, Zone};

/// Side length of the cube
pub const CUBE_SIZE: f32 = 10.0;
/// Half of the cube side; heaven face at +y, earth face at -y
pub const CUBE_HALF: f32 = CUBE_SIZE / 2.0;
/// Distance between a face edge and the row of dots next to it
pub const FACE_MARGIN: f32 = 1.0;
/// Pitch between neighbouring dots of a row
pub const DOT_SPACING: f32 = 0.8;
/// Offset of the two group-10 rows from the pivot centre
pub const PIVOT_ROW_OFFSET: f32 = 2.0;

/// (value, face, zone) for every row-shaped group
const FACE_GROUPS: [(u8, Face, Zone); 8] = [
    (1, Face::Heaven, Zone::North),
    (3, Face::Heaven, Zone::East),
    (7, Face::Heaven, Zone::South),
    (9, Face::Heaven, Zone::West),
    (6, Face::Earth, Zone::North),
    (8, Face::Earth, Zone::East),
    (2, Face::Earth, Zone::South),
    (4, Face::Earth, Zone::West),
];

/// A dot of the He Tu diagram
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeTuPoint {
    pub id: String,
    pub value: u8,
    pub polarity: Polarity,
    pub zone: Zone,
    pub face: Face,
    /// Static position in the cube layout
    pub position: Vec3,
}

impl GroupedPoint for HeTuPoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> u8 {
        self.value
    }
}

fn point_id(value: u8, index: usize) -> String {
    format!("hetu-{value:02}-{index:02}")
}

fn face_height(face: Face) -> f32 {
    match face {
        Face::Heaven => CUBE_HALF,
        Face::Earth => -CUBE_HALF,
        Face::Pivot => 0.0,
    }
}

/// Offset of dot `index` in a centred row of `count` dots
fn row_offset(index: usize, count: usize) -> f32 {
    (index as f32 - (count as f32 - 1.0) / 2.0) * DOT_SPACING
}

fn face_row(value: u8, face: Face, zone: Zone) -> impl Iterator<Item = HeTuPoint> {
    let count = usize::from(value);
    let y = face_height(face);
    let reach = CUBE_HALF - FACE_MARGIN;

    (0..count).map(move |index| {
        let along = row_offset(index, count);
        let position = match zone {
            Zone::North => Vec3::new(along, y, -reach),
            Zone::South => Vec3::new(along, y, reach),
            Zone::East => Vec3::new(-reach, y, along),
            Zone::West => Vec3::new(reach, y, along),
            Zone::Center => Vec3::new(along, y, 0.0),
        };
        HeTuPoint {
            id: point_id(value, index),
            value,
            polarity: Polarity::of(value),
            zone,
            face,
            position,
        }
    })
}

fn pivot_point(value: u8, index: usize, x: f32, z: f32) -> HeTuPoint {
    HeTuPoint {
        id: point_id(value, index),
        value,
        polarity: Polarity::of(value),
        zone: Zone::Center,
        face: Face::Pivot,
        position: Vec3::new(x, 0.0, z),
    }
}

/// Group 5: a cross of five dots (centre, then north, east, south, west arms)
fn pivot_cross() -> Vec<HeTuPoint> {
    let arm = DOT_SPACING;
    [(0.0, 0.0), (0.0, -arm), (-arm, 0.0), (0.0, arm), (arm, 0.0)]
        .into_iter()
        .enumerate()
        .map(|(index, (x, z))| pivot_point(5, index, x, z))
        .collect()
}

/// Group 10: two rows of five, the northern row first
fn pivot_rows() -> Vec<HeTuPoint> {
    (0..10)
        .map(|index| {
            let z = if index < 5 {
                -PIVOT_ROW_OFFSET
            } else {
                PIVOT_ROW_OFFSET
            };
            pivot_point(10, index, row_offset(index % 5, 5), z)
        })
        .collect()
}

/// Generate the canonical He Tu catalog
///
/// Group `n` holds exactly `n` dots. Points are ordered by group value and
/// then by in-group index.
pub fn generate_hetu_catalog() -> HeTuCatalog {
    let mut points: Vec<HeTuPoint> = FACE_GROUPS
        .iter()
        .flat_map(|&(value, face, zone)| face_row(value, face, zone))
        .collect();
    points.extend(pivot_cross());
    points.extend(pivot_rows());
    points.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.id.cmp(&b.id)));

    info!("Generated He Tu catalog with {} points", points.len());
    HeTuCatalog::from_points(points)
}
