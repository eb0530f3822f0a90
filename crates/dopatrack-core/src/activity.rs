//! Activity model and the built-in registry.
//!
//! An activity is one card in the UI: a name, an emoji icon, a signed
//! impact coefficient, and a user-adjustable duration and on/off flag.
//! The core never interprets the display-only fields (`icon`, `color`);
//! they pass through to whatever renders the registry.

use serde::{Deserialize, Serialize};

/// Shortest duration the UI offers, in minutes.
pub const DURATION_MIN_MINUTES: u32 = 5;
/// Longest duration the UI offers, in minutes.
pub const DURATION_MAX_MINUTES: u32 = 240;

/// Behavior class of an activity, derived from the sign of its impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityClass {
    /// Negative impact: feels hard up front, raises the baseline.
    BaselineBuilding,
    /// Non-negative impact: instant spike followed by a crash.
    Spiking,
}

impl ActivityClass {
    pub fn label(self) -> &'static str {
        match self {
            ActivityClass::BaselineBuilding => "baseline-building",
            ActivityClass::Spiking => "spiking",
        }
    }
}

/// One toggleable activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Stable slug, e.g. `"studying"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Signed coefficient in [-1, 1]; the sign picks the simulation branch
    /// and the magnitude scales the level change.
    pub impact: f64,
    /// Display-only emoji.
    pub icon: String,
    /// Display-only hex color.
    pub color: String,
    /// Duration in minutes; the tracker keeps this within
    /// [`DURATION_MIN_MINUTES`, `DURATION_MAX_MINUTES`].
    pub duration_min: u32,
    /// Whether the activity participates in the simulation.
    pub active: bool,
}

impl Activity {
    /// Create an inactive activity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        impact: f64,
        icon: impl Into<String>,
        color: impl Into<String>,
        duration_min: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            impact,
            icon: icon.into(),
            color: color.into(),
            duration_min,
            active: false,
        }
    }

    /// Behavior class from the impact sign.
    pub fn class(&self) -> ActivityClass {
        if self.impact < 0.0 {
            ActivityClass::BaselineBuilding
        } else {
            ActivityClass::Spiking
        }
    }

    /// Whether the activity participates in curve generation.
    pub fn eligible(&self) -> bool {
        self.active && self.duration_min > 0
    }
}

/// The stock registry: nine activities, all starting inactive.
pub fn builtin_activities() -> Vec<Activity> {
    vec![
        Activity::new("studying", "Studying", -0.6, "📚", "#22c55e", 60),
        Activity::new("exercise", "Exercise", -0.4, "🏃", "#14b8a6", 45),
        Activity::new("reading", "Reading", -0.5, "📖", "#22c55e", 45),
        Activity::new("cooking", "Cooking", -0.3, "🍳", "#14b8a6", 30),
        Activity::new("meditation", "Meditation", -0.7, "🧘", "#22c55e", 20),
        Activity::new("gaming", "Gaming", 0.9, "🎮", "#f59e0b", 90),
        Activity::new("social-media", "Social Media", 0.8, "📱", "#f59e0b", 60),
        Activity::new("watching-tv", "Watching TV", 0.6, "📺", "#f59e0b", 120),
        Activity::new("eating", "Eating", 0.4, "🍽️", "#8b5cf6", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_impact_sign() {
        let low = Activity::new("a", "A", -0.4, "x", "#000000", 30);
        assert_eq!(low.class(), ActivityClass::BaselineBuilding);

        let high = Activity::new("b", "B", 0.4, "x", "#000000", 30);
        assert_eq!(high.class(), ActivityClass::Spiking);

        // Zero impact counts as spiking (degenerate spike).
        let neutral = Activity::new("c", "C", 0.0, "x", "#000000", 30);
        assert_eq!(neutral.class(), ActivityClass::Spiking);
    }

    #[test]
    fn test_eligibility() {
        let mut activity = Activity::new("a", "A", 0.5, "x", "#000000", 30);
        assert!(!activity.eligible()); // Inactive by default.

        activity.active = true;
        assert!(activity.eligible());

        activity.duration_min = 0;
        assert!(!activity.eligible());
    }

    #[test]
    fn test_builtin_registry() {
        let activities = builtin_activities();
        assert_eq!(activities.len(), 9);
        assert!(activities.iter().all(|a| !a.active));
        assert!(activities
            .iter()
            .all(|a| (-1.0..=1.0).contains(&a.impact)));
        assert!(activities.iter().all(|a| {
            (DURATION_MIN_MINUTES..=DURATION_MAX_MINUTES).contains(&a.duration_min)
        }));

        let studying = activities.iter().find(|a| a.id == "studying").unwrap();
        assert_eq!(studying.impact, -0.6);
        assert_eq!(studying.duration_min, 60);
    }
}
