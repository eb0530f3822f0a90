//! Activity registry commands.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ActivityAction {
    /// List the activity registry
    List {
        /// Custom registry TOML
        #[arg(long)]
        registry: Option<PathBuf>,
        /// JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ActivityAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ActivityAction::List { registry, json } => list(registry, json),
    }
}

fn list(registry: Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let activities = super::load_registry(registry.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    println!(
        "{:<3} {:<14} {:<14} {:>7} {:<18} {:>8}",
        "", "ID", "NAME", "IMPACT", "CLASS", "DURATION"
    );
    for activity in &activities {
        println!(
            "{:<3} {:<14} {:<14} {:>+7.1} {:<18} {:>5} min",
            activity.icon,
            activity.id,
            activity.name,
            activity.impact,
            activity.class().label(),
            activity.duration_min,
        );
    }
    Ok(())
}
