use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Camera tunables, grouped so callers pass them explicitly instead of
/// reaching for free-standing globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse travel.
    pub sensitivity: f32,
    /// Initial zoom angle in degrees.
    pub zoom: f32,
    /// Intended draw range in world units.
    pub render_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            // commercial jets cruise around 150-250 m/s
            speed: 200.0,
            sensitivity: 0.1,
            zoom: 45.0,
            render_distance: 100.0,
        }
    }
}

impl CameraConfig {
    /// Load tunables from a JSON file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read camera config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse camera config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CameraConfig::default();
        assert_eq!(config.speed, 200.0);
        assert_eq!(config.sensitivity, 0.1);
        assert_eq!(config.zoom, 45.0);
        assert_eq!(config.render_distance, 100.0);
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let config: CameraConfig = serde_json::from_str(r#"{"speed": 50.0}"#).unwrap();
        assert_eq!(config.speed, 50.0);
        assert_eq!(config.sensitivity, 0.1);
        assert_eq!(config.zoom, 45.0);
    }

    #[test]
    fn full_json_round_trips() {
        let config = CameraConfig {
            speed: 10.0,
            sensitivity: 0.25,
            zoom: 30.0,
            render_distance: 500.0,
        };
        let text = serde_json::to_string(&config).unwrap();
        let parsed: CameraConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CameraConfig::load(Path::new("/nonexistent/camera.json")).unwrap_err();
        assert!(err.to_string().contains("camera.json"));
    }
}
