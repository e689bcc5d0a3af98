//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::utils::fs::{get_or_create_config_dir, write_atomic};

/// Configuration file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Path of the configuration file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load configuration from `path`, writing defaults if the file is absent
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save_config_to(path, &config)?;
        info!(path = %path.display(), "Wrote default configuration");
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config.normalized())
}

/// Save configuration to `path`
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    write_atomic(path, content.as_bytes())
}

/// Apply `change` to the configuration stored at `path` and write it back
pub fn update_config_at(path: &Path, change: impl FnOnce(&mut AppConfig)) -> Result<AppConfig> {
    let mut config = load_config_from(path)?;
    change(&mut config);
    save_config_to(path, &config)?;
    Ok(config)
}

/// Load the application configuration, falling back to defaults on error
pub fn load_config() -> AppConfig {
    match config_path().and_then(|path| load_config_from(&path)) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load configuration, using defaults");
            AppConfig::default()
        }
    }
}
