//! Simulation settings
//!
//! Loaded from a JSON file on native, or left at defaults. Missing fields fall
//! back to the built-in values so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Wildlife simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the shared random source (whole layout derives from it)
    pub seed: u64,

    // === Population ===
    pub fish_count: usize,
    pub shark_count: usize,
    pub plant_count: usize,

    // === World ===
    /// Horizontal half-extent creatures spawn in and are kept inside
    pub spawn_radius: f32,
    /// Height of the water surface
    pub surface_y: f32,
    /// Minimum distance below the surface
    pub min_fish_depth: f32,
    /// Minimum gap above the seafloor
    pub floor_clearance: f32,

    // === Headless runner ===
    /// Number of frames to simulate
    pub frames: u32,
    /// Fixed frame delta (seconds)
    pub frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 42,

            fish_count: FISH_COUNT,
            shark_count: SHARK_COUNT,
            plant_count: PLANT_COUNT,

            spawn_radius: SPAWN_RADIUS,
            surface_y: SURFACE_Y,
            min_fish_depth: MIN_FISH_DEPTH,
            floor_clearance: FLOOR_CLEARANCE,

            frames: 600,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl Settings {
    /// Settings with a different seed, everything else default
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.spawn_radius.is_finite() || self.spawn_radius < 0.0 {
            return Err(SettingsError::Invalid {
                field: "spawn_radius",
                reason: "must be finite and non-negative",
            });
        }
        if !self.surface_y.is_finite() {
            return Err(SettingsError::Invalid {
                field: "surface_y",
                reason: "must be finite",
            });
        }
        if !self.min_fish_depth.is_finite() || self.min_fish_depth < 0.0 {
            return Err(SettingsError::Invalid {
                field: "min_fish_depth",
                reason: "must be finite and non-negative",
            });
        }
        if !self.floor_clearance.is_finite() || self.floor_clearance < 0.0 {
            return Err(SettingsError::Invalid {
                field: "floor_clearance",
                reason: "must be finite and non-negative",
            });
        }
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "frame_dt",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Total entities spawned by `Simulation::start`
    pub fn total_entities(&self) -> usize {
        self.fish_count + self.shark_count + self.plant_count
    }

    /// Highest y a creature may occupy
    pub fn depth_ceiling(&self) -> f32 {
        self.surface_y - self.min_fish_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.total_entities(), 3086);
    }

    #[test]
    fn test_partial_json_overrides() {
        let settings = Settings::from_json(r#"{ "seed": 7, "plant_count": 10 }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.plant_count, 10);
        assert_eq!(settings.fish_count, FISH_COUNT);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::with_seed(1234);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "spawn_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "spawn_radius",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "frame_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "frame_dt", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_depth_ceiling() {
        let settings = Settings::default();
        assert_eq!(settings.depth_ceiling(), -5.0);
    }
}
