//! # Dopatrack Core Library
//!
//! This library provides the core logic for Dopatrack, a dopamine-loading
//! visualization tool: users toggle daily activities on and off, adjust
//! their durations, and watch the simulated dopamine level respond. It
//! implements a CLI-first philosophy where all operations are available via
//! a standalone CLI binary, with any graphical shell being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Curve Generator**: a pure function from the current activity set to
//!   an ordered `(time, level)` sample sequence, recomputed from scratch on
//!   every change -- no retained simulation state
//! - **Activity Tracker**: the mutable holder behind the UI (toggles,
//!   clamped duration edits, reset)
//! - **Registry Config**: TOML-described activity catalogs
//! - **Sweep Harness**: deterministic what-if runs over scenario variations
//!
//! ## Key Components
//!
//! - [`generate`]: the curve generator
//! - [`ActivityTracker`]: activity state holder
//! - [`RegistryConfig`]: activity catalog input format
//! - [`SweepHarness`]: scenario sweeps and metrics

pub mod activity;
pub mod config;
pub mod curve;
pub mod error;
pub mod simulation;
pub mod tracker;

pub use activity::{
    builtin_activities, Activity, ActivityClass, DURATION_MAX_MINUTES, DURATION_MIN_MINUTES,
};
pub use config::RegistryConfig;
pub use curve::{
    generate, render_ascii_chart, render_ascii_chart_with_start, Sample, BASELINE_LEVEL,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use simulation::{CurveMetrics, Scenario, ScenarioVariation, SweepHarness, SweepResult};
pub use tracker::ActivityTracker;
