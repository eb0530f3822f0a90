//! Dopamine curve generation and rendering.
//!
//! The generator maps the current activity set to an ordered sample
//! sequence; the chart renders a sequence for terminal display.

mod chart;
mod generator;

pub use chart::{render_ascii_chart, render_ascii_chart_with_start};
pub use generator::{
    generate, Sample, BASELINE_LEVEL, DECAY_RATE, IMPACT_SCALE, RECOVERY_RATE,
};
