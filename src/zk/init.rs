use crate::api::ZkApi;
use crate::config::CONFIG_FILENAME;
use crate::error::{Result, ZkError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Environment variable that points zk at a different config file.
pub const CONFIG_ENV: &str = "ZK_CONFIG";

/// Picks the config file: an explicit path wins, then `$ZK_CONFIG`, then
/// `~/.zkcli`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
        .ok_or_else(|| ZkError::config("Could not determine the home directory"))
}

pub fn initialize(explicit: Option<&Path>) -> Result<ZkApi> {
    let config_path = resolve_config_path(explicit)?;
    log::debug!("using config file {}", config_path.display());
    Ok(ZkApi::new(config_path))
}
