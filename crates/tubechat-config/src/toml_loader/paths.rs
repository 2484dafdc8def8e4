//! Where the config file lives, and seeding it with the commented template.

use std::path::{Path, PathBuf};

use tracing::info;
use tubechat_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "tubechat";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/tubechat/config.toml`.
pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// The config file under the OS config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented template to `path`, creating missing parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| ConfigError::ParseError(format!("cannot create {}: {e}", dir.display())))?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("cannot write config template {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "wrote config template");
    Ok(())
}
