//! Scenario sweep commands.

use clap::Subcommand;
use std::path::PathBuf;

use dopatrack_core::{
    render_ascii_chart, Scenario, ScenarioVariation, SweepHarness, SweepResult,
};

#[derive(Subcommand)]
pub enum SimulateAction {
    /// Sweep one activity's duration across a range
    Sweep {
        /// Range as id=from..to:step (minutes; step defaults to 15)
        #[arg(long, value_name = "ID=FROM..TO:STEP")]
        vary: String,
        /// Also activate an activity by id (repeatable)
        #[arg(long = "on", value_name = "ID")]
        on: Vec<String>,
        /// Custom registry TOML
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Run a scenario file and report its curve
    Run {
        /// Scenario JSON path
        #[arg(long)]
        scenario: PathBuf,
    },
    /// Write the current selection as a scenario file
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
        /// Destination path
        #[arg(long, short)]
        output: PathBuf,
        /// Scenario name
        #[arg(long, default_value = "scenario")]
        name: String,
    },
}

pub fn run(action: SimulateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SimulateAction::Sweep { vary, on, registry } => sweep(vary, on, registry),
        SimulateAction::Run { scenario } => run_scenario_file(scenario),
        SimulateAction::Export {
            on,
            durations,
            registry,
            output,
            name,
        } => export(on, durations, registry, output, name),
    }
}

fn sweep(
    vary: String,
    on: Vec<String>,
    registry: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (id, from, to, step) = parse_sweep_spec(&vary)?;

    let mut tracker = super::build_tracker(registry.as_deref(), &on, &[])?;
    tracker.activate(&id)?;
    let base = Scenario::new(format!("sweep {id}"), tracker.activities().to_vec());

    let variations: Vec<ScenarioVariation> = (from..=to)
        .step_by(step as usize)
        .map(|minutes| ScenarioVariation::Duration {
            id: id.clone(),
            minutes,
        })
        .collect();

    let mut harness = SweepHarness::new();
    let results = harness.run_sweep(&base, &variations);

    println!("Sweeping {id} from {from} to {to} min (step {step}):\n");
    println!(
        "{:>8} {:>8} {:>7} {:>7} {:>7} {:>7}",
        "MINUTES", "SAMPLES", "PEAK", "TROUGH", "FINAL", "MEAN"
    );
    for (variation, result) in variations.iter().zip(&results) {
        let minutes = match variation {
            ScenarioVariation::Duration { minutes, .. } => *minutes,
            _ => 0,
        };
        print_metrics_row(minutes, result);
    }

    Ok(())
}

fn print_metrics_row(minutes: u32, result: &SweepResult) {
    println!(
        "{:>8} {:>8} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
        minutes,
        result.metrics.sample_count,
        result.metrics.peak_level,
        result.metrics.trough_level,
        result.metrics.final_level,
        result.metrics.mean_level,
    );
}

fn run_scenario_file(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = SweepHarness::import_scenario(&path)?;
    let mut harness = SweepHarness::new();
    let result = harness.run_scenario(&scenario);

    println!("Scenario: {}", result.scenario.name);
    println!("{}", render_ascii_chart(&result.samples));
    println!(
        "Eligible: {}  Samples: {}  Span: {:.0} min",
        result.metrics.eligible_activities,
        result.metrics.sample_count,
        result.metrics.total_minutes
    );
    println!(
        "Peak: {:.1}  Trough: {:.1}  Final: {:.1}  Mean: {:.1}",
        result.metrics.peak_level,
        result.metrics.trough_level,
        result.metrics.final_level,
        result.metrics.mean_level
    );

    Ok(())
}

fn export(
    on: Vec<String>,
    durations: Vec<String>,
    registry: Option<PathBuf>,
    output: PathBuf,
    name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = super::build_tracker(registry.as_deref(), &on, &durations)?;
    let scenario = Scenario::new(name, tracker.activities().to_vec());

    SweepHarness::new().export_scenario(&scenario, &output)?;
    println!("wrote scenario '{}' to {}", scenario.name, output.display());

    Ok(())
}

/// Parse an `id=from..to:step` sweep spec.
fn parse_sweep_spec(raw: &str) -> Result<(String, u32, u32, u32), Box<dyn std::error::Error>> {
    let err = || format!("invalid sweep spec '{raw}', expected id=from..to:step");

    let (id, rest) = raw.split_once('=').ok_or_else(err)?;
    let (range, step) = match rest.split_once(':') {
        Some((range, step)) => (range, step.parse()?),
        None => (rest, 15),
    };
    let (from, to) = range.split_once("..").ok_or_else(err)?;
    let from: u32 = from.parse()?;
    let to: u32 = to.parse()?;

    if step == 0 || to < from {
        return Err(err().into());
    }
    Ok((id.to_string(), from, to, step))
}
