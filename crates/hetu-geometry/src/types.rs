//! Shared vocabulary for both diagrams

use std::fmt;

pub use glam::{Vec2, Vec3};

/// Index of a point inside its catalog arena
pub type PointIndex = usize;

/// Binary classification of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Odd numbers, light
    Yang,
    /// Even numbers, dark
    Yin,
}

impl Polarity {
    /// Polarity of a group value
    pub fn of(value: u8) -> Self {
        if value % 2 == 1 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// Compass zone of a He Tu group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    North,
    South,
    East,
    West,
    Center,
}

impl Zone {
    /// Get a descriptive name for this zone
    pub fn name(&self) -> &'static str {
        match self {
            Zone::North => "north",
            Zone::South => "south",
            Zone::East => "east",
            Zone::West => "west",
            Zone::Center => "center",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layer of the He Tu cube a point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Top face, odd groups
    Heaven,
    /// Bottom face, even groups
    Earth,
    /// Middle layer holding groups 5 and 10
    Pivot,
}

impl Face {
    /// Get a descriptive name for this face
    pub fn name(&self) -> &'static str {
        match self {
            Face::Heaven => "heaven",
            Face::Earth => "earth",
            Face::Pivot => "pivot",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compass direction attached to a Luo Shu group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// Short compass label
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::Northeast => "NE",
            Direction::East => "E",
            Direction::Southeast => "SE",
            Direction::South => "S",
            Direction::Southwest => "SW",
            Direction::West => "W",
            Direction::Northwest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// The eight trigrams of the Later Heaven arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    /// Unicode glyph for the trigram
    pub fn glyph(&self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Dui => '☱',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Kan => '☵',
            Trigram::Gen => '☶',
            Trigram::Kun => '☷',
        }
    }

    /// Romanized name
    pub fn name(&self) -> &'static str {
        match self {
            Trigram::Qian => "Qian",
            Trigram::Dui => "Dui",
            Trigram::Li => "Li",
            Trigram::Zhen => "Zhen",
            Trigram::Xun => "Xun",
            Trigram::Kan => "Kan",
            Trigram::Gen => "Gen",
            Trigram::Kun => "Kun",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.name())
    }
}

/// Symbolic metadata carried by one representative point per Luo Shu group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSymbol {
    pub trigram: Trigram,
    pub direction: Direction,
}

/// Which of the two diagrams is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagram {
    HeTu,
    LuoShu,
}

impl Diagram {
    /// Parse a diagram name such as "hetu" or "luo-shu"
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "hetu" => Some(Diagram::HeTu),
            "luoshu" | "loshu" => Some(Diagram::LuoShu),
            _ => None,
        }
    }

    /// Get a descriptive name for this diagram
    pub fn name(&self) -> &'static str {
        match self {
            Diagram::HeTu => "He Tu",
            Diagram::LuoShu => "Luo Shu",
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visual modes a user can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// He Tu spiral galaxy
    Galaxy,
    /// He Tu conical double helix
    Helix,
    /// Luo Shu flat grid
    Plane,
    /// Luo Shu sphere mapping
    Sphere,
    /// Luo Shu sphere flattened back onto the grid plane
    Projection,
}

impl Mode {
    /// Parse a mode name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "galaxy" | "spiral" => Some(Mode::Galaxy),
            "helix" | "dna" => Some(Mode::Helix),
            "plane" | "flat" => Some(Mode::Plane),
            "sphere" => Some(Mode::Sphere),
            "projection" | "project" => Some(Mode::Projection),
            _ => None,
        }
    }

    /// Diagram this mode belongs to
    pub fn diagram(&self) -> Diagram {
        match self {
            Mode::Galaxy | Mode::Helix => Diagram::HeTu,
            Mode::Plane | Mode::Sphere | Mode::Projection => Diagram::LuoShu,
        }
    }

    /// Lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Galaxy => "galaxy",
            Mode::Helix => "helix",
            Mode::Plane => "plane",
            Mode::Sphere => "sphere",
            Mode::Projection => "projection",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Common view over catalog points used by the sequence sorter
pub trait GroupedPoint {
    /// Unique identifier
    fn id(&self) -> &str;
    /// Traditional number of the group this point belongs to
    fn value(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_of() {
        assert_eq!(Polarity::of(1), Polarity::Yang);
        assert_eq!(Polarity::of(9), Polarity::Yang);
        assert_eq!(Polarity::of(4), Polarity::Yin);
        assert_eq!(Polarity::of(10), Polarity::Yin);
    }

    #[test]
    fn test_diagram_from_name() {
        assert_eq!(Diagram::from_name("hetu"), Some(Diagram::HeTu));
        assert_eq!(Diagram::from_name("He-Tu"), Some(Diagram::HeTu));
        assert_eq!(Diagram::from_name("luo_shu"), Some(Diagram::LuoShu));
        assert_eq!(Diagram::from_name("bagua"), None);
    }

    #[test]
    fn test_mode_diagram() {
        assert_eq!(Mode::Galaxy.diagram(), Diagram::HeTu);
        assert_eq!(Mode::Projection.diagram(), Diagram::LuoShu);
        assert_eq!(Mode::from_name("HELIX"), Some(Mode::Helix));
        assert_eq!(Mode::from_name("torus"), None);
    }

    #[test]
    fn test_trigram_display() {
        assert_eq!(Trigram::Kan.to_string(), "☵ Kan");
        assert_eq!(Direction::Southwest.to_string(), "SW");
    }
}
