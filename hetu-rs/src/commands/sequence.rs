//! Traversal ordering of a diagram's groups

use anyhow::{Context, Result};
use clap::Args;
use hetu_geometry::types::Vec3;
use hetu_geometry::{
    Diagram, GroupedPoint, generate_hetu_catalog, generate_luoshu_catalog, sort_by_group_sequence,
};
use serde::Serialize;

use crate::utils::{
    DiagramArg, OutputFormat, add_table_row, create_table, emit_structured, format_vec3,
    parse_groups,
};

#[derive(Args)]
pub struct SequenceArgs {
    /// Diagram whose points are ordered
    #[arg(value_enum)]
    pub diagram: DiagramArg,

    /// Group values in visiting order
    #[arg(short, long, default_value = "1,3,7,9")]
    pub groups: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SequenceEntry {
    step: usize,
    id: String,
    value: u8,
    position: Vec3,
}

fn order_points<P: GroupedPoint>(
    points: &[P],
    groups: &[u8],
    position: impl Fn(&P) -> Vec3,
) -> Result<Vec<SequenceEntry>> {
    let order = sort_by_group_sequence(points, groups)
        .with_context(|| format!("Cannot order groups {groups:?}"))?;
    Ok(order
        .into_iter()
        .enumerate()
        .map(|(step, index)| {
            let point = &points[index];
            SequenceEntry {
                step,
                id: point.id().to_string(),
                value: point.value(),
                position: position(point),
            }
        })
        .collect())
}

pub fn execute(args: SequenceArgs) -> Result<()> {
    let groups = parse_groups(&args.groups)?;
    let entries = match Diagram::from(args.diagram) {
        Diagram::HeTu => {
            let catalog = generate_hetu_catalog();
            order_points(catalog.points(), &groups, |p| p.position)?
        }
        Diagram::LuoShu => {
            let catalog = generate_luoshu_catalog();
            order_points(catalog.points(), &groups, |p| p.plane_position)?
        }
    };

    if emit_structured(&entries, args.format)? {
        return Ok(());
    }

    let mut table = create_table(&["Step", "ID", "Group", "Position"]);
    for entry in &entries {
        add_table_row(
            &mut table,
            [
                entry.step.to_string(),
                entry.id.clone(),
                entry.value.to_string(),
                format_vec3(entry.position),
            ],
        );
    }
    table.printstd();
    Ok(())
}
