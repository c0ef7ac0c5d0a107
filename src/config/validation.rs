//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Path will be created if it doesn't exist, so just check it's valid
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    if config.log_retention_days == 0 {
        bail!("log_retention_days must be at least 1");
    }

    if let Some(filter_path) = &config.filter_path {
        if filter_path.as_os_str().is_empty() {
            bail!("filter_path cannot be empty");
        }
        if filter_path.to_string_lossy().contains('\0') {
            bail!("Invalid filter_path: contains null character");
        }
    }

    Ok(())
}
