//! CLI subcommand implementations and shared flag plumbing.

pub mod activity;
pub mod curve;
pub mod simulate;

use std::path::Path;

use dopatrack_core::{builtin_activities, Activity, ActivityTracker, RegistryConfig};

/// Load the registry: a TOML file when given, the built-in set otherwise.
pub(crate) fn load_registry(
    path: Option<&Path>,
) -> Result<Vec<Activity>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(RegistryConfig::load(path)?.into_activities()),
        None => Ok(builtin_activities()),
    }
}

/// Build a tracker over the registry and apply `--on` / `--duration` flags.
/// Unknown activity ids are hard errors.
pub(crate) fn build_tracker(
    registry: Option<&Path>,
    on: &[String],
    durations: &[String],
) -> Result<ActivityTracker, Box<dyn std::error::Error>> {
    let mut tracker = ActivityTracker::new(load_registry(registry)?);
    for id in on {
        tracker.activate(id)?;
    }
    for raw in durations {
        let (id, minutes) = parse_duration_override(raw)?;
        tracker.set_duration(&id, minutes)?;
    }
    Ok(tracker)
}

/// Parse an `id=minutes` duration override.
pub(crate) fn parse_duration_override(
    raw: &str,
) -> Result<(String, u32), Box<dyn std::error::Error>> {
    let (id, minutes) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid duration override '{raw}', expected id=minutes"))?;
    Ok((id.to_string(), minutes.parse()?))
}
