//! Config file loader and serialization.

use crate::error::ConfigError;
use crate::models::BuildConfig;
use std::fs;
use std::path::Path;

/// Load a [`BuildConfig`] from a JSON file.
///
/// Absent fields fall back to the config defaults (notably
/// `autoUpdate: true`), so a partial file is valid.
pub fn load_config_from_file(path: &Path) -> Result<BuildConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.display().to_string())
        } else {
            ConfigError::IoError(e)
        }
    })?;

    let config: BuildConfig = serde_json::from_str(&content).map_err(ConfigError::InvalidJson)?;
    Ok(config)
}

/// Save a [`BuildConfig`] to a JSON file, creating parent directories as
/// needed.
pub fn save_config_to_file(config: &BuildConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
    }

    let json_content = serde_json::to_string_pretty(config).map_err(ConfigError::InvalidJson)?;
    fs::write(path, json_content).map_err(ConfigError::IoError)?;
    Ok(())
}
