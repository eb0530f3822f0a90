//! Dopamine curve generator.
//!
//! A pure function from the current activity set to an ordered sequence of
//! `(time, level)` samples. It holds no state between calls -- callers
//! recompute the whole curve on every toggle or duration edit.
//!
//! Baseline-building activities (negative impact) decline to a trough over
//! the first 30% of their duration, then recover toward a capped target
//! over the remaining 70%. Spiking activities (non-negative impact) rise to
//! a peak over the first 20%, then decay along an ease-out quadratic over
//! the remaining 80%.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;

/// Resting dopamine level; start of every curve and the implicit
/// homeostatic target.
pub const BASELINE_LEVEL: f64 = 50.0;
/// Level points recovered per minute during a recovery phase.
pub const RECOVERY_RATE: f64 = 0.5;
/// Level points per unit of impact.
pub const IMPACT_SCALE: f64 = 30.0;
/// Level points lost per minute during a decay phase.
pub const DECAY_RATE: f64 = 0.3;

// Clamp band. The asymmetry (trough floor 20, recovery ceiling 60, peak
// ceiling 100, decay floor 30) is part of the intended visual behavior and
// is not tunable.
const TROUGH_FLOOR: f64 = 20.0;
const RECOVERY_CEILING: f64 = BASELINE_LEVEL + 10.0;
const PEAK_CEILING: f64 = 100.0;
const DECAY_FLOOR: f64 = 30.0;

// Fixed sub-phase sample counts, independent of input magnitude.
const DECLINE_STEPS: u32 = 5;
const RECOVERY_STEPS: u32 = 7;
const SPIKE_STEPS: u32 = 3;
const DECAY_STEPS: u32 = 8;

/// One point of the simulated curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Minutes since the start of the sequence; non-decreasing.
    pub time: f64,
    /// Simulated dopamine level (soft 0-100 band).
    pub level: f64,
}

/// Generate the dopamine curve for the given activity set.
///
/// Only activities with `active` and a positive duration participate.
/// Eligible activities are processed sorted by ascending impact (stable,
/// so ties keep input order): baseline-building activities are simulated
/// before spiking ones regardless of user ordering. With nothing eligible
/// the curve is the single baseline sample `(0, 50)`.
///
/// Inputs are trusted -- out-of-range impacts or durations are not
/// rejected, they just extrapolate subject to the internal clamps.
pub fn generate(activities: &[Activity]) -> Vec<Sample> {
    let mut eligible: Vec<&Activity> = activities.iter().filter(|a| a.eligible()).collect();

    if eligible.is_empty() {
        return vec![Sample {
            time: 0.0,
            level: BASELINE_LEVEL,
        }];
    }

    eligible.sort_by(|a, b| a.impact.total_cmp(&b.impact));

    // Per activity: a start sample plus 5+7 (baseline-building) or 3+8
    // (spiking) interpolated samples.
    let mut samples = Vec::with_capacity(eligible.len() * 13);
    let mut current_time = 0.0;
    let mut current_level = BASELINE_LEVEL;

    for activity in eligible {
        let duration = f64::from(activity.duration_min);
        let start_level = current_level;

        samples.push(Sample {
            time: current_time,
            level: current_level,
        });

        if activity.impact < 0.0 {
            // Gradual decline to the trough over the first 30% of the
            // duration.
            let trough = (current_level + activity.impact * IMPACT_SCALE).max(TROUGH_FLOOR);
            let decline_time = duration * 0.3;
            for i in 1..=DECLINE_STEPS {
                let progress = f64::from(i) / f64::from(DECLINE_STEPS);
                samples.push(Sample {
                    time: current_time + decline_time * progress,
                    level: start_level + (trough - start_level) * progress,
                });
            }

            // Slow recovery over the remaining 70%, capped just above
            // baseline.
            let recovery_start = current_time + decline_time;
            let recovery_duration = duration * 0.7;
            let recovery_target =
                (trough + RECOVERY_RATE * recovery_duration).min(RECOVERY_CEILING);
            for i in 1..=RECOVERY_STEPS {
                let progress = f64::from(i) / f64::from(RECOVERY_STEPS);
                samples.push(Sample {
                    time: recovery_start + recovery_duration * progress,
                    level: trough + (recovery_target - trough) * progress,
                });
            }

            current_level = recovery_target;
            current_time += duration;
        } else {
            // Quick spike to the peak over the first 20% of the duration.
            let peak = (current_level + activity.impact * IMPACT_SCALE).min(PEAK_CEILING);
            let spike_time = duration * 0.2;
            for i in 1..=SPIKE_STEPS {
                let progress = f64::from(i) / f64::from(SPIKE_STEPS);
                samples.push(Sample {
                    time: current_time + spike_time * progress,
                    level: start_level + (peak - start_level) * progress,
                });
            }

            // Eased decay over the remaining 80%: fast at first, slow near
            // the end.
            let decay_start = current_time + spike_time;
            let decay_duration = duration * 0.8;
            let decay_target = (peak - DECAY_RATE * decay_duration).max(DECAY_FLOOR);
            for i in 1..=DECAY_STEPS {
                let progress = f64::from(i) / f64::from(DECAY_STEPS);
                let eased = 1.0 - (1.0 - progress).powi(2);
                samples.push(Sample {
                    time: decay_start + decay_duration * progress,
                    level: peak - (peak - decay_target) * eased,
                });
            }

            current_level = decay_target;
            current_time += duration;
        }
    }

    samples
}
