//! He Tu mode parameters

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use hetu_geometry::modes::{ModeConfig, generate_galaxy_map, generate_helix_map};
use hetu_geometry::types::Vec3;
use hetu_geometry::{GroupedPoint, generate_hetu_catalog};
use serde::Serialize;

use crate::utils::{
    OutputFormat, add_table_row, create_table, emit_structured, format_degrees, format_vec3,
    format_vertical,
};

/// He Tu animation mode
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two-armed spiral galaxy
    #[value(alias = "spiral")]
    Galaxy,
    /// Conical double helix
    #[value(alias = "dna")]
    Helix,
}

#[derive(Args)]
pub struct ModesArgs {
    /// Mode to show
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// Animation time at which positions are evaluated, seconds
    #[arg(short, long, default_value_t = 0.0)]
    pub time: f32,

    /// Only show points of this group
    #[arg(short, long)]
    pub group: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ModeEntry<'a> {
    id: &'a str,
    value: u8,
    config: ModeConfig,
    position: Vec3,
}

pub fn execute(args: ModesArgs) -> Result<()> {
    let catalog = generate_hetu_catalog();
    let map = match args.mode {
        ModeArg::Galaxy => generate_galaxy_map(&catalog),
        ModeArg::Helix => generate_helix_map(&catalog),
    }
    .with_context(|| format!("Failed to generate the {:?} map", args.mode))?;

    let entries: Vec<ModeEntry<'_>> = catalog
        .points()
        .iter()
        .zip(map.configs())
        .filter(|(point, _)| args.group.is_none_or(|g| point.value() == g))
        .map(|(point, config)| ModeEntry {
            id: point.id(),
            value: point.value(),
            config: *config,
            position: config.evaluate(args.time),
        })
        .collect();

    if emit_structured(&entries, args.format)? {
        return Ok(());
    }

    let mut table = create_table(&[
        "ID", "Group", "Kind", "Radius", "Angle", "Speed", "Spin", "Height", "Position",
    ]);
    for entry in &entries {
        let config = &entry.config;
        add_table_row(
            &mut table,
            [
                entry.id.to_string(),
                entry.value.to_string(),
                format!("{:?}", config.kind),
                format!("{:.3}", config.radius),
                format_degrees(config.start_angle),
                format!("{:.2}", config.speed),
                format!("{:?}", config.spin),
                format_vertical(config),
                format_vec3(entry.position),
            ],
        );
    }
    table.printstd();
    println!("Positions evaluated at t = {:.2}s", args.time);
    Ok(())
}
