//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Days to keep daily log files
    pub log_retention_days: u64,

    /// Filter definition used when `--filter` is not given
    pub filter_path: Option<PathBuf>,

    /// Abort on the first event that cannot be parsed or evaluated
    /// instead of logging and skipping it
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            log_retention_days: 2,
            filter_path: None,
            fail_fast: false,
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(default_config_dir)
        .join("logs")
}

/// `~/.config/event-filter`
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("event-filter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.debug);
        assert!(!config.fail_fast);
        assert!(config.filter_path.is_none());
        assert!(config.log_path.ends_with("event-filter/logs"));
        assert_eq!(config.log_retention_days, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("fail_fast = true").unwrap();
        assert!(config.fail_fast);
        assert!(!config.debug);
        assert_eq!(config.log_path, default_log_path());
    }

    #[test]
    fn test_log_path_for_config_dir() {
        let path = default_log_path_for_config_dir(Some(Path::new("/tmp/ef")));
        assert_eq!(path, PathBuf::from("/tmp/ef/logs"));
    }
}
