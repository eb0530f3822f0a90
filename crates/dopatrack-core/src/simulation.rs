//! Deterministic sweep harness for the curve generator.
//!
//! Lets callers explore how activation and duration choices shape the
//! curve under reproducible conditions: a scenario is a named activity
//! set, a variation is a single edit, and a sweep runs a base scenario
//! through a list of variations, collecting metrics per run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::activity::Activity;
use crate::curve::{generate, Sample};
use crate::error::Result;

/// A named activity set to simulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub activities: Vec<Activity>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            name: name.into(),
            activities,
        }
    }

    /// Activate an activity by id; unknown ids are ignored.
    pub fn with_active(mut self, id: &str) -> Self {
        if let Some(a) = self.activities.iter_mut().find(|a| a.id == id) {
            a.active = true;
        }
        self
    }
}

/// A single edit applied to a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScenarioVariation {
    /// Turn an activity on.
    Activate(String),
    /// Turn an activity off.
    Deactivate(String),
    /// Override an activity's duration.
    Duration { id: String, minutes: u32 },
}

impl ScenarioVariation {
    /// Apply the variation; unknown ids leave the scenario unchanged.
    pub fn apply(&self, mut scenario: Scenario) -> Scenario {
        match self {
            ScenarioVariation::Activate(id) => {
                if let Some(a) = scenario.activities.iter_mut().find(|a| &a.id == id) {
                    a.active = true;
                }
            }
            ScenarioVariation::Deactivate(id) => {
                if let Some(a) = scenario.activities.iter_mut().find(|a| &a.id == id) {
                    a.active = false;
                }
            }
            ScenarioVariation::Duration { id, minutes } => {
                if let Some(a) = scenario.activities.iter_mut().find(|a| &a.id == id) {
                    a.duration_min = *minutes;
                }
            }
        }
        scenario
    }
}

/// Summary figures for one generated curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurveMetrics {
    pub sample_count: usize,
    pub eligible_activities: usize,
    /// Time of the final sample, in minutes.
    pub total_minutes: f64,
    pub peak_level: f64,
    pub trough_level: f64,
    pub final_level: f64,
    /// Time-weighted mean level (trapezoidal).
    pub mean_level: f64,
}

impl CurveMetrics {
    /// Compute metrics from a sample sequence. The generator never returns
    /// an empty sequence, but an empty input yields zeroed metrics rather
    /// than a panic.
    pub fn from_samples(samples: &[Sample], eligible_activities: usize) -> Self {
        let Some(last) = samples.last() else {
            return Self::default();
        };

        let mut peak = f64::MIN;
        let mut trough = f64::MAX;
        for s in samples {
            peak = peak.max(s.level);
            trough = trough.min(s.level);
        }

        let total_minutes = last.time;
        let mean_level = if total_minutes > 0.0 {
            let area: f64 = samples
                .windows(2)
                .map(|w| (w[1].time - w[0].time) * (w[0].level + w[1].level) / 2.0)
                .sum();
            area / total_minutes
        } else {
            last.level
        };

        Self {
            sample_count: samples.len(),
            eligible_activities,
            total_minutes,
            peak_level: peak,
            trough_level: trough,
            final_level: last.level,
            mean_level,
        }
    }
}

/// One sweep run: the scenario that ran, its curve, and the metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub scenario: Scenario,
    pub samples: Vec<Sample>,
    pub metrics: CurveMetrics,
    pub run_at: DateTime<Utc>,
}

/// Scenario runner with a run history.
#[derive(Debug, Default)]
pub struct SweepHarness {
    history: Vec<SweepResult>,
}

impl SweepHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single scenario.
    pub fn run_scenario(&mut self, scenario: &Scenario) -> SweepResult {
        let samples = generate(&scenario.activities);
        let eligible = scenario.activities.iter().filter(|a| a.eligible()).count();
        let metrics = CurveMetrics::from_samples(&samples, eligible);

        let result = SweepResult {
            scenario: scenario.clone(),
            samples,
            metrics,
            run_at: Utc::now(),
        };
        self.history.push(result.clone());
        result
    }

    /// Run the base scenario once per variation.
    pub fn run_sweep(
        &mut self,
        base: &Scenario,
        variations: &[ScenarioVariation],
    ) -> Vec<SweepResult> {
        variations
            .iter()
            .map(|variation| {
                let scenario = variation.apply(base.clone());
                self.run_scenario(&scenario)
            })
            .collect()
    }

    pub fn history(&self) -> &[SweepResult] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Write a scenario to a JSON file.
    pub fn export_scenario(&self, scenario: &Scenario, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(scenario)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a scenario from a JSON file.
    pub fn import_scenario(path: &Path) -> Result<Scenario> {
        let json = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&json)?;
        Ok(scenario)
    }
}
