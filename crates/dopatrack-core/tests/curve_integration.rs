//! Integration tests for the curve workflow: registry -> tracker -> curve
//! -> metrics -> rendering.

use dopatrack_core::{
    generate, render_ascii_chart, ActivityTracker, CurveMetrics, RegistryConfig, Scenario,
    ScenarioVariation, SweepHarness, BASELINE_LEVEL,
};

#[test]
fn test_full_curve_workflow() {
    let mut tracker = ActivityTracker::default();

    // Nothing on: the flat baseline.
    let samples = tracker.curve();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].time, 0.0);
    assert_eq!(samples[0].level, BASELINE_LEVEL);

    // A morning of studying followed by gaming.
    tracker.toggle("studying").unwrap();
    tracker.toggle("gaming").unwrap();
    let samples = tracker.curve();

    // 13 samples for the baseline-builder, 12 for the spiker.
    assert_eq!(samples.len(), 25);
    assert!(samples.windows(2).all(|w| w[1].time >= w[0].time));

    // Studying (impact -0.6) is simulated first even though gaming has a
    // longer duration; the curve dips before it spikes.
    assert!(samples[1].level < BASELINE_LEVEL);
    let last = samples.last().unwrap();
    assert_eq!(last.time, 150.0); // 60 + 90 minutes.

    let metrics = CurveMetrics::from_samples(&samples, tracker.eligible_count());
    assert_eq!(metrics.eligible_activities, 2);
    assert!((metrics.trough_level - 32.0).abs() < 1e-9);
    assert!(metrics.peak_level > 77.0); // Spike starts from 53, not 50.

    // Reset drops everything back to the stock configuration.
    tracker.reset();
    assert_eq!(tracker.active_count(), 0);
}

#[test]
fn test_baseline_building_numbers() {
    // impact -0.6 over 60 minutes: decline to 32 by t=18, recover to 53 by
    // t=60.
    let mut tracker = ActivityTracker::default();
    tracker.activate("studying").unwrap();

    let samples = tracker.curve();
    assert!((samples[5].time - 18.0).abs() < 1e-9);
    assert!((samples[5].level - 32.0).abs() < 1e-9);
    assert!((samples[12].time - 60.0).abs() < 1e-9);
    assert!((samples[12].level - 53.0).abs() < 1e-9);
    assert!(samples.iter().all(|s| s.level >= 20.0));
}

#[test]
fn test_spiking_numbers() {
    // impact 0.9 over 90 minutes: peak 77 by t=18, eased decay to 55.4 by
    // t=90.
    let mut tracker = ActivityTracker::default();
    tracker.activate("gaming").unwrap();

    let samples = tracker.curve();
    assert!((samples[3].time - 18.0).abs() < 1e-9);
    assert!((samples[3].level - 77.0).abs() < 1e-9);
    assert!((samples[11].time - 90.0).abs() < 1e-9);
    assert!((samples[11].level - 55.4).abs() < 1e-9);
    assert!(samples.iter().all(|s| s.level <= 100.0));
}

#[test]
fn test_custom_registry_to_curve() {
    let config = RegistryConfig::from_toml_str(
        r#"
        [[activity]]
        id = "deep-work"
        name = "Deep Work"
        impact = -0.8
        duration = 90
        active = true
        "#,
    )
    .unwrap();

    let samples = generate(&config.into_activities());
    assert_eq!(samples.len(), 13);
    // Trough: max(20, 50 - 0.8 * 30) = 26.
    assert!((samples[5].level - 26.0).abs() < 1e-9);
}

#[test]
fn test_sample_json_shape() {
    let mut tracker = ActivityTracker::default();
    tracker.activate("eating").unwrap();

    let json = serde_json::to_value(tracker.curve()).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["time"], 0.0);
    assert_eq!(first["level"], 50.0);
}

#[test]
fn test_chart_renders_curve() {
    let mut tracker = ActivityTracker::default();
    tracker.activate("meditation").unwrap();

    let chart = render_ascii_chart(&tracker.curve());
    assert!(chart.contains("Dopamine curve:"));
    assert!(chart.contains("█"));
    assert!(chart.contains("   0m"));
    assert!(chart.contains("  20m"));
}

#[test]
fn test_sweep_over_durations() {
    let mut harness = SweepHarness::new();
    let base = Scenario::new("gaming night", dopatrack_core::builtin_activities())
        .with_active("gaming");

    let variations: Vec<ScenarioVariation> = (30u32..=90)
        .step_by(30)
        .map(|minutes| ScenarioVariation::Duration {
            id: "gaming".into(),
            minutes,
        })
        .collect();

    let results = harness.run_sweep(&base, &variations);
    assert_eq!(results.len(), 3);

    // Longer gaming sessions decay further before the session ends.
    assert!(results[2].metrics.final_level < results[0].metrics.final_level);
    // But the peak is the same regardless of duration.
    assert!((results[0].metrics.peak_level - results[2].metrics.peak_level).abs() < 1e-9);
}
