//! Hierarchical view of a diagram

use anyhow::Result;
use clap::Args;
use hetu_geometry::catalog::grid_anchor;
use hetu_geometry::modes::sphere::anchor_position;
use hetu_geometry::types::{Face, Polarity, Zone};
use hetu_geometry::{Diagram, generate_hetu_catalog, generate_luoshu_catalog};

use crate::utils::{DiagramArg, NodeKind, TreeNode, TreeOptions, format_vec3, render_tree};

#[derive(Args)]
pub struct TreeArgs {
    /// Diagram to show
    #[arg(value_enum)]
    pub diagram: DiagramArg,

    /// Maximum depth to display
    #[arg(long)]
    pub depth: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show details inline
    #[arg(long)]
    pub compact: bool,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let root = match Diagram::from(args.diagram) {
        Diagram::HeTu => hetu_tree(),
        Diagram::LuoShu => luoshu_tree(),
    };
    let options = TreeOptions {
        max_depth: args.depth,
        no_color: args.no_color,
        compact: args.compact,
    };
    print!("{}", render_tree(&root, &options));
    Ok(())
}

fn polarity_name(value: u8) -> &'static str {
    match Polarity::of(value) {
        Polarity::Yang => "yang",
        Polarity::Yin => "yin",
    }
}

fn hetu_tree() -> TreeNode {
    let catalog = generate_hetu_catalog();
    let mut root = TreeNode::new(
        format!("{} ({} points)", Diagram::HeTu, catalog.len()),
        NodeKind::Diagram,
    );

    for face in [Face::Heaven, Face::Earth, Face::Pivot] {
        let mut face_node = TreeNode::new(face.to_string(), NodeKind::Face);
        for zone in [Zone::North, Zone::East, Zone::South, Zone::West, Zone::Center] {
            let mut zone_node = TreeNode::new(zone.to_string(), NodeKind::Zone);
            for value in 1..=10u8 {
                let points: Vec<_> = catalog
                    .group(value)
                    .filter(|(_, p)| p.face == face && p.zone == zone)
                    .map(|(_, p)| p)
                    .collect();
                if points.is_empty() {
                    continue;
                }

                let mut group = TreeNode::new(format!("Group {value}"), NodeKind::Group)
                    .with_detail("polarity", polarity_name(value));
                for point in points {
                    group = group.add_child(
                        TreeNode::new(point.id.clone(), NodeKind::Point)
                            .with_detail("position", format_vec3(point.position)),
                    );
                }
                zone_node = zone_node.add_child(group);
            }
            if !zone_node.children.is_empty() {
                face_node = face_node.add_child(zone_node);
            }
        }
        root = root.add_child(face_node);
    }
    root
}

fn luoshu_tree() -> TreeNode {
    let catalog = generate_luoshu_catalog();
    let mut root = TreeNode::new(
        format!("{} ({} points)", Diagram::LuoShu, catalog.len()),
        NodeKind::Diagram,
    );

    for value in 1..=9u8 {
        let mut group = TreeNode::new(format!("Group {value}"), NodeKind::Group)
            .with_detail("polarity", polarity_name(value));
        if let Some(anchor) = grid_anchor(value) {
            group = group.with_detail("grid", format_vec3(anchor));
        }
        if let Some(anchor) = anchor_position(value) {
            group = group.with_detail("sphere", format_vec3(anchor));
        }
        for (_, point) in catalog.group(value) {
            if let Some(symbol) = point.symbol {
                group = group
                    .with_detail("trigram", symbol.trigram.to_string())
                    .with_detail("direction", symbol.direction.to_string());
            }
            group = group.add_child(
                TreeNode::new(point.id.clone(), NodeKind::Point)
                    .with_detail("plane", format_vec3(point.plane_position))
                    .with_detail("sphere", format_vec3(point.sphere_position)),
            );
        }
        root = root.add_child(group);
    }
    root
}
