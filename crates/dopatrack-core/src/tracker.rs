//! Activity state holder.
//!
//! Owns the mutable activity list behind the UI: toggles, duration edits,
//! and reset to the initial configuration. The curve is never cached --
//! every read recomputes it from the current list.

use crate::activity::{
    builtin_activities, Activity, DURATION_MAX_MINUTES, DURATION_MIN_MINUTES,
};
use crate::curve::{generate, Sample};
use crate::error::ValidationError;

/// Mutable holder for the activity list.
#[derive(Debug, Clone)]
pub struct ActivityTracker {
    activities: Vec<Activity>,
    initial: Vec<Activity>,
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new(builtin_activities())
    }
}

impl ActivityTracker {
    /// Create a tracker over the given registry. The initial configuration
    /// is what `reset()` restores.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            initial: activities.clone(),
            activities,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.activities.iter().filter(|a| a.active).count()
    }

    pub fn eligible_count(&self) -> usize {
        self.activities.iter().filter(|a| a.eligible()).count()
    }

    /// Recompute the curve from the current list.
    pub fn curve(&self) -> Vec<Sample> {
        generate(&self.activities)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flip an activity's active flag. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ValidationError> {
        let activity = self.find_mut(id)?;
        activity.active = !activity.active;
        Ok(activity.active)
    }

    pub fn activate(&mut self, id: &str) -> Result<(), ValidationError> {
        self.find_mut(id)?.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self, id: &str) -> Result<(), ValidationError> {
        self.find_mut(id)?.active = false;
        Ok(())
    }

    /// Set an activity's duration, clamped into the allowed band.
    /// Returns the stored value.
    pub fn set_duration(&mut self, id: &str, minutes: u32) -> Result<u32, ValidationError> {
        let activity = self.find_mut(id)?;
        activity.duration_min = minutes.clamp(DURATION_MIN_MINUTES, DURATION_MAX_MINUTES);
        Ok(activity.duration_min)
    }

    /// Restore the initial configuration.
    pub fn reset(&mut self) {
        self.activities = self.initial.clone();
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Activity, ValidationError> {
        self.activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ValidationError::UnknownActivity(id.to_string()))
    }
}
