use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/banyo/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("banyo").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Every interval must be positive; a zero tick rate or timeout would
    /// stall the event loop or deny geolocation instantly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be positive".to_string(),
            });
        }
        if self.location.startup_timeout_secs == 0 || self.location.locate_timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "location timeouts must be positive".to_string(),
            });
        }
        if !(self.map.span_meters > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "map.span_meters must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.location.startup_timeout_secs, 5);
        assert_eq!(config.location.locate_timeout_secs, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[location]\nlocate_timeout_secs = 20\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.location.locate_timeout_secs, 20);
        assert_eq!(config.location.startup_timeout_secs, 5);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn zero_tick_rate_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

        let err = Config::load_from(&path).err().expect("should fail");
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn simulated_fix_parses_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[map]\nsimulated_fix = { lat = 10.32, lng = 123.90 }\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let fix = config.map.simulated_fix.expect("fix present");
        assert_eq!(fix.lat, 10.32);
        assert_eq!(fix.lng, 123.90);
    }
}
