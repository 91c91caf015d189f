//! Point catalog listing

use anyhow::Result;
use clap::Args;
use hetu_geometry::{Diagram, HeTuPoint, LuoShuPoint, generate_hetu_catalog, generate_luoshu_catalog};

use crate::utils::{
    DiagramArg, OutputFormat, add_table_row, create_table, emit_structured, format_vec3,
};

#[derive(Args)]
pub struct CatalogArgs {
    /// Diagram to list
    #[arg(value_enum)]
    pub diagram: DiagramArg,

    /// Only show points of this group
    #[arg(short, long)]
    pub group: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    match Diagram::from(args.diagram) {
        Diagram::HeTu => list_hetu(args.group, args.format),
        Diagram::LuoShu => list_luoshu(args.group, args.format),
    }
}

fn list_hetu(group: Option<u8>, format: OutputFormat) -> Result<()> {
    let catalog = generate_hetu_catalog();
    let points: Vec<&HeTuPoint> = catalog
        .points()
        .iter()
        .filter(|p| group.is_none_or(|g| p.value == g))
        .collect();

    if emit_structured(&points, format)? {
        return Ok(());
    }

    let mut table = create_table(&["ID", "Group", "Polarity", "Face", "Zone", "Position"]);
    for point in &points {
        add_table_row(
            &mut table,
            [
                point.id.clone(),
                point.value.to_string(),
                format!("{:?}", point.polarity),
                point.face.to_string(),
                point.zone.to_string(),
                format_vec3(point.position),
            ],
        );
    }
    table.printstd();
    println!("{} of {} points", points.len(), catalog.len());
    Ok(())
}

fn list_luoshu(group: Option<u8>, format: OutputFormat) -> Result<()> {
    let catalog = generate_luoshu_catalog();
    let points: Vec<&LuoShuPoint> = catalog
        .points()
        .iter()
        .filter(|p| group.is_none_or(|g| p.value == g))
        .collect();

    if emit_structured(&points, format)? {
        return Ok(());
    }

    let mut table = create_table(&["ID", "Group", "Polarity", "Symbol", "Plane", "Sphere"]);
    for point in &points {
        let symbol = point
            .symbol
            .map(|s| format!("{} {}", s.trigram, s.direction.abbreviation()))
            .unwrap_or_default();
        add_table_row(
            &mut table,
            [
                point.id.clone(),
                point.value.to_string(),
                format!("{:?}", point.polarity),
                symbol,
                format_vec3(point.plane_position),
                format_vec3(point.sphere_position),
            ],
        );
    }
    table.printstd();
    println!("{} of {} points", points.len(), catalog.len());
    Ok(())
}
