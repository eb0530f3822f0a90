//! Curve rendering and export commands.

use chrono::NaiveTime;
use clap::Subcommand;
use std::path::PathBuf;

use dopatrack_core::{render_ascii_chart, render_ascii_chart_with_start, CurveMetrics};

#[derive(Subcommand)]
pub enum CurveAction {
    /// Render the curve as an ASCII chart
    Show {
        /// Activate an activity by id (repeatable)
        #[arg(long = "on", value_name = "ID")]
        on: Vec<String>,
        /// Override a duration as id=minutes (repeatable)
        #[arg(long = "duration", value_name = "ID=MIN")]
        durations: Vec<String>,
        /// Custom registry TOML
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Label samples with clock times starting here (HH:MM)
        #[arg(long)]
        start: Option<String>,
    },
    /// Export the curve as JSON samples
    Export {
        /// Activate an activity by id (repeatable)
        #[arg(long = "on", value_name = "ID")]
        on: Vec<String>,
        /// Override a duration as id=minutes (repeatable)
        #[arg(long = "duration", value_name = "ID=MIN")]
        durations: Vec<String>,
        /// Custom registry TOML
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: CurveAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CurveAction::Show {
            on,
            durations,
            registry,
            start,
        } => show(on, durations, registry, start),
        CurveAction::Export {
            on,
            durations,
            registry,
            pretty,
            output,
        } => export(on, durations, registry, pretty, output),
    }
}

fn show(
    on: Vec<String>,
    durations: Vec<String>,
    registry: Option<PathBuf>,
    start: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = super::build_tracker(registry.as_deref(), &on, &durations)?;
    let samples = tracker.curve();

    let chart = match start {
        Some(raw) => {
            let start = NaiveTime::parse_from_str(&raw, "%H:%M")?;
            render_ascii_chart_with_start(&samples, start)
        }
        None => render_ascii_chart(&samples),
    };
    println!("{chart}");

    let metrics = CurveMetrics::from_samples(&samples, tracker.eligible_count());
    println!("Summary:");
    println!("  Active activities: {}", tracker.active_count());
    println!("  Samples: {}", metrics.sample_count);
    println!("  Span: {:.0} min", metrics.total_minutes);
    println!(
        "  Peak: {:.1}  Trough: {:.1}  Final: {:.1}  Mean: {:.1}",
        metrics.peak_level, metrics.trough_level, metrics.final_level, metrics.mean_level
    );

    if tracker.active_count() == 0 {
        println!("\n  Tip: toggle activities on with --on <id> to shape the curve.");
    }

    Ok(())
}

fn export(
    on: Vec<String>,
    durations: Vec<String>,
    registry: Option<PathBuf>,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = super::build_tracker(registry.as_deref(), &on, &durations)?;
    let samples = tracker.curve();

    let json = if pretty {
        serde_json::to_string_pretty(&samples)?
    } else {
        serde_json::to_string(&samples)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("wrote {} samples to {}", samples.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
