//! Scripted animation runs

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use clap::Args;
use hetu_geometry::{AnimationSettings, Diagram, Frame, Intent, Scene};
use log::{debug, warn};
use serde::Serialize;

use crate::utils::{
    DiagramArg, OutputFormat, add_table_row, create_table, emit_structured, format_vec3,
};

#[derive(Args)]
pub struct SimulateArgs {
    /// Diagram to animate
    #[arg(value_enum)]
    pub diagram: DiagramArg,

    /// Comma-separated intents with start times, e.g. "galaxy@0,toggle-run@2.5,reset@4"
    #[arg(short, long, default_value = "")]
    pub script: String,

    /// Simulated time, seconds
    #[arg(short, long, default_value_t = 5.0)]
    pub duration: f32,

    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Record every Nth frame; frames with intents or phase changes are always recorded
    #[arg(long, default_value_t = 30)]
    pub every: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// One scripted intent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// Simulated time at which the intent fires, seconds
    pub at: f32,
    pub intent: Intent,
}

#[derive(Serialize)]
struct TimelineEntry {
    frame: usize,
    time: f32,
    phase: String,
    running: bool,
    blends: BTreeMap<String, f32>,
    intents: Vec<String>,
}

#[derive(Serialize)]
struct SimulationReport {
    diagram: Diagram,
    timeline: Vec<TimelineEntry>,
    frame: Frame,
}

/// Parse `intent@seconds` entries; an entry without `@` fires at 0
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<ScriptStep> {
            let (intent, at) = match entry.split_once('@') {
                Some((intent, at)) => {
                    let at = at
                        .trim()
                        .parse::<f32>()
                        .with_context(|| format!("Invalid time in script entry: {entry}"))?;
                    (intent, at)
                }
                None => (entry, 0.0),
            };
            if !at.is_finite() || at < 0.0 {
                bail!("Script times must be non-negative: {entry}");
            }
            let intent = intent
                .parse::<Intent>()
                .with_context(|| format!("Invalid script entry: {entry}"))?;
            Ok(ScriptStep { at, intent })
        })
        .collect::<Result<Vec<_>>>()?;

    steps.sort_by(|a, b| a.at.total_cmp(&b.at));
    Ok(steps)
}

fn timeline_entry(frame_index: usize, time: f32, frame: &Frame, intents: Vec<String>) -> TimelineEntry {
    TimelineEntry {
        frame: frame_index,
        time,
        phase: frame.phase.clone(),
        running: frame.running,
        blends: frame.blends.clone(),
        intents,
    }
}

pub fn execute(args: SimulateArgs, settings: AnimationSettings) -> Result<()> {
    let steps = parse_script(&args.script)?;
    let fps = args.fps.max(1);
    let every = args.every.max(1);
    let dt = 1.0 / fps as f32;
    let frames = (args.duration.max(0.0) * fps as f32).ceil() as usize;

    let diagram = Diagram::from(args.diagram);
    let mut scene = Scene::new(settings).context("Failed to build the scene")?;
    scene.apply(Intent::SelectDiagram(diagram))?;

    let mut pending = steps.into_iter().peekable();
    let mut snapshot = scene.frame();
    let mut timeline = vec![timeline_entry(0, 0.0, &snapshot, Vec::new())];

    for frame_index in 1..=frames {
        let started = (frame_index - 1) as f32 * dt;
        let mut fired = Vec::new();
        while let Some(step) = pending.next_if(|step| step.at <= started) {
            debug!("t={:.3}s: {}", started, step.intent);
            scene
                .apply(step.intent)
                .with_context(|| format!("Script step {}@{} failed", step.intent, step.at))?;
            fired.push(step.intent.to_string());
        }

        scene.update(dt);
        let previous_phase = std::mem::take(&mut snapshot.phase);
        snapshot = scene.frame();

        if !fired.is_empty()
            || snapshot.phase != previous_phase
            || frame_index % every == 0
            || frame_index == frames
        {
            timeline.push(timeline_entry(
                frame_index,
                frame_index as f32 * dt,
                &snapshot,
                fired,
            ));
        }
    }

    for step in pending {
        warn!(
            "Script step {}@{} lies beyond the simulated {}s",
            step.intent, step.at, args.duration
        );
    }

    let report = SimulationReport {
        diagram,
        timeline,
        frame: snapshot,
    };
    if emit_structured(&report, args.format)? {
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &SimulationReport) {
    let mut table = create_table(&["Frame", "Time", "Phase", "Running", "Blends", "Intents"]);
    for entry in &report.timeline {
        let blends: Vec<String> = entry
            .blends
            .iter()
            .map(|(name, value)| format!("{name}={value:.3}"))
            .collect();
        add_table_row(
            &mut table,
            [
                entry.frame.to_string(),
                format!("{:.3}", entry.time),
                entry.phase.clone(),
                entry.running.to_string(),
                blends.join(" "),
                entry.intents.join(", "),
            ],
        );
    }
    table.printstd();

    let frame = &report.frame;
    println!();
    println!("Final frame: {} ({})", frame.diagram, frame.phase);
    for path in &frame.paths {
        println!("  path {}: {} samples", path.name, path.points.len());
    }
    if let Some(marker) = frame.flow_marker {
        println!("  flow marker at {}", format_vec3(marker));
    }

    let mut points = create_table(&["ID", "Group", "Position"]);
    for point in &frame.points {
        add_table_row(
            &mut points,
            [
                point.id.clone(),
                point.value.to_string(),
                format_vec3(point.position),
            ],
        );
    }
    points.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use hetu_geometry::Mode;

    #[test]
    fn test_parse_script_sorts_by_time() {
        let steps = parse_script("reset@4, galaxy@0,toggle-run@2.5").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep {
                    at: 0.0,
                    intent: Intent::SelectMode(Mode::Galaxy)
                },
                ScriptStep {
                    at: 2.5,
                    intent: Intent::ToggleRun
                },
                ScriptStep {
                    at: 4.0,
                    intent: Intent::Reset
                },
            ]
        );
    }

    #[test]
    fn test_parse_script_defaults_and_errors() {
        assert!(parse_script("").unwrap().is_empty());
        assert_eq!(parse_script("helix").unwrap()[0].at, 0.0);
        assert!(parse_script("helix@soon").is_err());
        assert!(parse_script("helix@-1").is_err());
        assert!(parse_script("fly@1").is_err());
    }
}
