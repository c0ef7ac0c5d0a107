//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{default_config_dir, default_log_path_for_config_dir};
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path: ~/.config/event-filter/config.toml
    pub fn default_path() -> PathBuf {
        default_config_dir().join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    /// Log path defaults to the same directory as config file, and a relative
    /// `filter_path` is resolved against that directory.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if !path.exists() {
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content, path.parent())
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Parse and validate configuration content located in `config_dir`.
    pub fn parse(content: &str, config_dir: Option<&Path>) -> Result<Config> {
        let mut config: Config =
            toml::from_str(content).context("Failed to parse configuration")?;

        // If log_path was not explicitly set in config, use config file directory
        let general_default = default_log_path_for_config_dir(None);
        if config.log_path == general_default {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        if let (Some(filter_path), Some(dir)) = (&config.filter_path, config_dir) {
            if filter_path.is_relative() && !filter_path.as_os_str().is_empty() {
                config.filter_path = Some(dir.join(filter_path));
            }
        }

        config.validate()?;

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# event-filter configuration file

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# If --config is specified, logs go to that directory/logs
# log_path = "~/.config/event-filter/logs"

# Days to keep daily log files before they are removed (default: 2)
log_retention_days = 2

# Filter definition used when --filter is not given.
# Relative paths are resolved against this file's directory.
# filter_path = "filter.json"

# Abort on the first event that fails to parse or evaluate (default: false).
# When false, such events are logged and skipped.
fail_fast = false
"#
        .to_string()
    }
}
