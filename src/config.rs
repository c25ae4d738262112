//! Runtime Configuration Module
//! Window size and pager tunables, optionally read from a JSON file.

use crate::carousel::TransformParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "PLANT_STORE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub page_count: usize,
    pub transform: TransformParams,
    pub settle_duration_ms: u64,
    /// Release speed (points per second) above which a drag counts as a fling.
    pub fling_velocity_threshold: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 412.0,
            window_height: 915.0,
            page_count: 3,
            transform: TransformParams::default(),
            settle_duration_ms: 250,
            fling_velocity_threshold: 400.0,
        }
    }
}

impl AppConfig {
    /// Load from the file named by `PLANT_STORE_CONFIG`, or defaults when unset.
    pub fn from_environment() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a JSON config file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_count == 0 {
            return Err(ConfigError::Invalid("page_count must be at least 1".into()));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid(
                "window dimensions must be positive".into(),
            ));
        }
        let t = &self.transform;
        if !(t.min_scale > 0.0 && t.min_scale <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "transform.min_scale {} must be in (0, 1]",
                t.min_scale
            )));
        }
        if !(t.max_rotation_degrees >= 0.0) {
            return Err(ConfigError::Invalid(
                "transform.max_rotation_degrees must not be negative".into(),
            ));
        }
        if !(t.blur_radius >= 0.0) {
            return Err(ConfigError::Invalid(
                "transform.blur_radius must not be negative".into(),
            ));
        }
        if !(self.fling_velocity_threshold >= 0.0) {
            return Err(ConfigError::Invalid(
                "fling_velocity_threshold must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_screen() {
        let config = AppConfig::default();
        assert_eq!(config.page_count, 3);
        assert_eq!(config.transform.max_rotation_degrees, 10.0);
        assert_eq!(config.transform.min_scale, 0.70);
        assert_eq!(config.transform.blur_radius, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config =
            AppConfig::from_json(r#"{ "page_count": 5, "transform": { "blur_radius": 2.5 } }"#)
                .unwrap();
        assert_eq!(config.page_count, 5);
        assert_eq!(config.transform.blur_radius, 2.5);
        assert_eq!(config.transform.min_scale, 0.70);
        assert_eq!(config.settle_duration(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "page_count": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "transform": { "min_scale": 1.5 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "transform": { "blur_radius": -1.0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window_width": 390.0, "settle_duration_ms": 120 }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.window_width, 390.0);
        assert_eq!(config.settle_duration(), Duration::from_millis(120));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match AppConfig::load(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
