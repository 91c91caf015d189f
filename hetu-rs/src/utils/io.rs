//! Settings loading and structured output

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use hetu_geometry::AnimationSettings;
use log::info;
use serde::Serialize;

use super::format::OutputFormat;

/// Load animation settings from a YAML or JSON file, or use the defaults
pub fn load_settings(path: Option<&Path>) -> Result<AnimationSettings> {
    let Some(path) = path else {
        return Ok(AnimationSettings::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    let settings: AnimationSettings = match extension.as_deref() {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON settings: {}", path.display()))?,
        Some("yaml" | "yml") => serde_yaml_ng::from_str(&text)
            .with_context(|| format!("Failed to parse YAML settings: {}", path.display()))?,
        _ => bail!(
            "Unsupported settings file extension: {} (expected .yaml, .yml or .json)",
            path.display()
        ),
    };

    settings
        .validate()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Print a value as JSON or YAML
///
/// Returns `false` for [`OutputFormat::Table`] so the caller renders its own table.
pub fn emit_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Table => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            print!(
                "{}",
                serde_yaml_ng::to_string(value).context("Failed to serialize YAML")?
            );
            Ok(true)
        }
    }
}
