//! TOML activity registry.
//!
//! An optional input file describing the activity catalog the tool works
//! with. Nothing is ever written back -- this is an input format, not
//! stored state. An empty or absent `[[activity]]` list falls back to the
//! built-in registry.
//!
//! ```toml
//! [[activity]]
//! id = "deep-work"
//! name = "Deep Work"
//! impact = -0.8
//! duration = 90
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::{
    builtin_activities, Activity, DURATION_MAX_MINUTES, DURATION_MIN_MINUTES,
};
use crate::error::ConfigError;

/// One `[[activity]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub name: String,
    pub impact: f64,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub active: bool,
}

/// Activity registry file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, rename = "activity")]
    pub activities: Vec<ActivityEntry>,
}

// Default functions
fn default_icon() -> String {
    "•".into()
}
fn default_color() -> String {
    "#3b82f6".into()
}
fn default_duration() -> u32 {
    30
}

impl RegistryConfig {
    /// Load and validate a registry file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate registry TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Boundary validation: the curve generator trusts its inputs, so
    /// out-of-range values are rejected here instead.
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.activities {
            let key = || format!("activity.{}", entry.id);

            if entry.id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "activity.id".into(),
                    message: "id must not be empty".into(),
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    key: key(),
                    message: "duplicate id".into(),
                });
            }
            if !(-1.0..=1.0).contains(&entry.impact) {
                return Err(ConfigError::InvalidValue {
                    key: key(),
                    message: format!("impact {} outside [-1, 1]", entry.impact),
                });
            }
            if !(DURATION_MIN_MINUTES..=DURATION_MAX_MINUTES).contains(&entry.duration) {
                return Err(ConfigError::InvalidValue {
                    key: key(),
                    message: format!(
                        "duration {} outside [{DURATION_MIN_MINUTES}, {DURATION_MAX_MINUTES}] minutes",
                        entry.duration
                    ),
                });
            }
        }
        Ok(())
    }

    /// Convert into core activities; an empty list yields the built-in
    /// registry.
    pub fn into_activities(self) -> Vec<Activity> {
        if self.activities.is_empty() {
            return builtin_activities();
        }
        self.activities
            .into_iter()
            .map(|entry| Activity {
                id: entry.id,
                name: entry.name,
                impact: entry.impact,
                icon: entry.icon,
                color: entry.color,
                duration_min: entry.duration,
                active: entry.active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_falls_back_to_builtin() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        let activities = config.into_activities();
        assert_eq!(activities.len(), 9);
        assert!(activities.iter().any(|a| a.id == "meditation"));
    }

    #[test]
    fn test_parse_custom_registry() {
        let config = RegistryConfig::from_toml_str(
            r##"
            [[activity]]
            id = "deep-work"
            name = "Deep Work"
            impact = -0.8
            duration = 90

            [[activity]]
            id = "doomscrolling"
            name = "Doomscrolling"
            impact = 1.0
            icon = "🌀"
            color = "#ef4444"
            duration = 45
            active = true
            "##,
        )
        .unwrap();

        let activities = config.into_activities();
        assert_eq!(activities.len(), 2);

        let deep_work = &activities[0];
        assert_eq!(deep_work.impact, -0.8);
        assert_eq!(deep_work.duration_min, 90);
        assert_eq!(deep_work.icon, "•"); // Field default.
        assert!(!deep_work.active);

        let doom = &activities[1];
        assert_eq!(doom.icon, "🌀");
        assert!(doom.active);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [[activity]]
            id = "a"
            name = "A"
            impact = 0.1

            [[activity]]
            id = "a"
            name = "Also A"
            impact = 0.2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_out_of_range_impact_is_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [[activity]]
            id = "a"
            name = "A"
            impact = 1.5
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("impact"));
    }

    #[test]
    fn test_out_of_range_duration_is_rejected() {
        let err = RegistryConfig::from_toml_str(
            r#"
            [[activity]]
            id = "a"
            name = "A"
            impact = 0.5
            duration = 300
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = RegistryConfig::from_toml_str("[[activity").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RegistryConfig::load(Path::new("/nonexistent/registry.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(
            &path,
            r#"
            [[activity]]
            id = "walk"
            name = "Walk"
            impact = -0.2
            duration = 25
            "#,
        )
        .unwrap();

        let config = RegistryConfig::load(&path).unwrap();
        assert_eq!(config.activities.len(), 1);
        assert_eq!(config.activities[0].id, "walk");
    }
}
