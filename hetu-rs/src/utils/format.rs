//! Formatting and argument parsing helpers

use anyhow::{Context, Result};
use clap::ValueEnum;
use hetu_geometry::Diagram;
use hetu_geometry::modes::{ModeConfig, Vertical};
use hetu_geometry::types::Vec3;

/// How command results are written to stdout
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

/// Diagram selector shared by several commands
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagramArg {
    /// He Tu (River Map)
    #[value(alias = "he-tu")]
    Hetu,
    /// Luo Shu (Lo Scroll)
    #[value(alias = "luo-shu", alias = "loshu")]
    Luoshu,
}

impl From<DiagramArg> for Diagram {
    fn from(arg: DiagramArg) -> Self {
        match arg {
            DiagramArg::Hetu => Diagram::HeTu,
            DiagramArg::Luoshu => Diagram::LuoShu,
        }
    }
}

/// Format a position with a fixed number of decimals
pub fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// Format an angle given in radians as degrees
pub fn format_degrees(radians: f32) -> String {
    format!("{:.1}°", radians.to_degrees())
}

/// Describe the vertical component of a mode config
pub fn format_vertical(config: &ModeConfig) -> String {
    match config.vertical {
        Vertical::Fixed(height) => format!("{height:.3}"),
        Vertical::Wobble {
            amplitude,
            frequency,
            ..
        } => format!("±{amplitude:.3} @ {frequency:.2}"),
    }
}

/// Parse a comma-separated list of group values such as `1,3,7,9`
pub fn parse_groups(text: &str) -> Result<Vec<u8>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u8>()
                .with_context(|| format!("Invalid group value: {part}"))
        })
        .collect()
}
