//! Stick configuration
//!
//! Read once at startup from TOML and never written back. Every field has a
//! default, so a partial file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::stick::{ActiveArea, StickError};

const CONFIG_DIR: &str = "touchstick";
const CONFIG_FILE: &str = "stick.toml";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TOUCHSTICK_CONFIG";

/// Construction-time settings of a virtual stick
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StickConfig {
    /// Rest position of the handle, in the host's stick space
    pub rest_position: [f32; 2],

    /// Region that accepts presses; its width is the drag radius
    pub active_area: ActiveArea,

    /// Seconds the handle takes to return to rest after release
    pub return_duration_secs: f32,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            rest_position: [50.0, 50.0],
            active_area: ActiveArea::default(),
            return_duration_secs: 1.0,
        }
    }
}

/// Errors while loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] StickError),
}

impl StickConfig {
    /// `$TOUCHSTICK_CONFIG`, or `<config dir>/touchstick/stick.toml`
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Loads and validates the file at `path`, or the defaults if it does not exist
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        if !exists {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!("Loaded stick config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Preconditions shared with [`VirtualStick::new`](crate::stick::VirtualStick::new)
    pub fn validate(&self) -> Result<(), StickError> {
        let [x, y] = self.rest_position;
        if !x.is_finite() || !y.is_finite() {
            return Err(StickError::InvalidRestPosition(x, y));
        }

        let ActiveArea { x, y, height, .. } = self.active_area;
        if !x.is_finite() || !y.is_finite() || !height.is_finite() || height < 0.0 {
            return Err(StickError::InvalidActiveArea(x, y, height));
        }

        let width = self.active_area.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(StickError::InvalidDragLength(width));
        }

        let duration = self.return_duration_secs;
        if !duration.is_finite() || duration < 0.0 {
            return Err(StickError::InvalidReturnDuration(duration));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = StickConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.active_area.width, 100.0);
        assert_eq!(config.return_duration_secs, 1.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = StickConfig::parse("return_duration_secs = 0.25\n").unwrap();
        assert_eq!(config.return_duration_secs, 0.25);
        assert_eq!(config.rest_position, [50.0, 50.0]);
        assert_eq!(config.active_area, ActiveArea::default());
    }

    #[test]
    fn test_partial_area_table_fills_defaults() {
        let config = StickConfig::parse("[active_area]\nwidth = 150.0\n").unwrap();
        assert_eq!(config.active_area, ActiveArea::new(0.0, 0.0, 150.0, 100.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_file() {
        let content = r#"
rest_position = [120.0, 80.0]
return_duration_secs = 0.5

[active_area]
x = 20.0
y = 10.0
width = 150.0
height = 140.0
"#;
        let config = StickConfig::parse(content).unwrap();
        assert_eq!(config.rest_position, [120.0, 80.0]);
        assert_eq!(config.active_area, ActiveArea::new(20.0, 10.0, 150.0, 140.0));
        assert_eq!(config.return_duration_secs, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StickConfig::default();
        config.active_area.width = 0.0;
        assert_eq!(config.validate(), Err(StickError::InvalidDragLength(0.0)));

        let mut config = StickConfig::default();
        config.return_duration_secs = -1.0;
        assert_eq!(
            config.validate(),
            Err(StickError::InvalidReturnDuration(-1.0))
        );

        let mut config = StickConfig::default();
        config.active_area.height = -1.0;
        assert_eq!(
            config.validate(),
            Err(StickError::InvalidActiveArea(0.0, 0.0, -1.0))
        );

        let mut config = StickConfig::default();
        config.active_area.height = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(StickError::InvalidActiveArea(_, _, _))
        ));

        let mut config = StickConfig::default();
        config.active_area.y = f32::NEG_INFINITY;
        assert!(matches!(
            config.validate(),
            Err(StickError::InvalidActiveArea(_, _, _))
        ));

        let mut config = StickConfig::default();
        config.rest_position = [f32::INFINITY, 0.0];
        assert!(matches!(
            config.validate(),
            Err(StickError::InvalidRestPosition(_, _))
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = StickConfig::load(&dir.path().join("missing.toml"))
            .await
            .unwrap();
        assert_eq!(config, StickConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "rest_position = [10.0, 20.0]\n")
            .await
            .unwrap();

        let config = StickConfig::load(&path).await.unwrap();
        assert_eq!(config.rest_position, [10.0, 20.0]);
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "[active_area]\nwidth = -5.0\n")
            .await
            .unwrap();

        let result = StickConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_load_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "return_duration_secs = \"soon\"\n")
            .await
            .unwrap();

        let result = StickConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
