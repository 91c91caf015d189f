//! Luo Shu energy circuit sampling

use anyhow::{Context, Result};
use clap::Args;
use hetu_geometry::{AnimationSettings, CircuitPath, generate_luoshu_catalog};

use crate::utils::{
    OutputFormat, add_table_row, create_table, emit_structured, format_vec3, parse_groups,
};

#[derive(Args)]
pub struct CircuitArgs {
    /// Anchor visiting order, e.g. "1,2,3,4,5,6,7,8,9,1" (defaults to the settings)
    #[arg(short, long)]
    pub order: Option<String>,

    /// Samples per leg (defaults to the settings)
    #[arg(short, long)]
    pub samples: Option<usize>,

    /// Print only every Nth sample in table output
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn execute(args: CircuitArgs, settings: &AnimationSettings) -> Result<()> {
    let order = match &args.order {
        Some(text) => parse_groups(text)?,
        None => settings.circuit_order.clone(),
    };
    let samples = args.samples.unwrap_or(settings.circuit_samples);

    let catalog = generate_luoshu_catalog();
    let path = CircuitPath::build(&catalog, &order, samples)
        .with_context(|| format!("Cannot build circuit through {order:?}"))?;

    if emit_structured(path.samples(), args.format)? {
        return Ok(());
    }

    let mut table = create_table(&["#", "Leg", "From", "To", "Plane", "Sphere", "Radius"]);
    let every = args.every.max(1);
    let last = path.samples().len() - 1;
    for (index, sample) in path.samples().iter().enumerate() {
        if index % every != 0 && index != last {
            continue;
        }
        add_table_row(
            &mut table,
            [
                index.to_string(),
                sample.leg.to_string(),
                path.order()[sample.leg].to_string(),
                path.order()[sample.leg + 1].to_string(),
                format_vec3(sample.plane),
                format_vec3(sample.sphere),
                format!("{:.3}", sample.sphere.length()),
            ],
        );
    }
    table.printstd();
    println!(
        "{} legs, {} samples through {:?}",
        path.leg_count(),
        path.samples().len(),
        path.order()
    );
    Ok(())
}
