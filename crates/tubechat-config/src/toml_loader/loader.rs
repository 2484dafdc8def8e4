//! Core TOML config loading: read from path or platform default.

use std::path::Path;
use tracing::info;
use tubechat_common::ConfigError;

use crate::schema::TubechatConfig;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Range checks are left to [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<TubechatConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TubechatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tubechat/config.toml`
/// On Linux: `~/.config/tubechat/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<TubechatConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(TubechatConfig::default());
    }

    load_from_path(&path)
}
