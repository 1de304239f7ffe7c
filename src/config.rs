//! Application Configuration
//! Optional JSON settings file with defaults for every field.

use crate::dashboard::{RangeOption, DEFAULT_TOP_N, TOP_N_RANGE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "hq_insight.json";
pub const DEFAULT_DATA_FILE: &str = "fortune_500_hq.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("default_top_n must be between 1 and 10, got {0}")]
    InvalidTopN(usize),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub default_top_n: usize,
    pub default_range: RangeOption,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_top_n: DEFAULT_TOP_N,
            default_range: RangeOption::default(),
            window_width: 1400.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    /// An explicit path that cannot be read is an error; a missing default
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.is_file() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !TOP_N_RANGE.contains(&self.default_top_n) {
            return Err(ConfigError::InvalidTopN(self.default_top_n));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = AppConfig::from_json(
            r#"{ "data_file": "data/hq.csv", "default_top_n": 8, "default_range": "Narrow" }"#,
        )
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/hq.csv"));
        assert_eq!(config.default_top_n, 8);
        assert_eq!(config.default_range, RangeOption::Narrow);
        assert_eq!(config.window_width, 1400.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "colour": "red" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn top_n_outside_slider_range_is_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "default_top_n": 0 }"#),
            Err(ConfigError::InvalidTopN(0))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "default_top_n": 11 }"#),
            Err(ConfigError::InvalidTopN(11))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("no/such/hq_insight.json")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
