mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file named by `CONFIG_PATH` (default `config.yaml`)
/// and applies environment overrides.
pub async fn load() -> Result<Config> {
    load_with(|key: &str| env::var(key).ok(), DEFAULT_CONFIG_PATH).await
}

/// Like [`load`], reading variables through `lookup`. A missing `default_path`
/// falls back to built-in defaults; a missing `CONFIG_PATH` file is an error.
pub async fn load_with<F>(lookup: F, default_path: impl AsRef<Path>) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let default_path = default_path.as_ref();

    let config = match lookup("CONFIG_PATH") {
        Some(path) => load_from(&path).await?,
        None if tokio::fs::try_exists(default_path).await? => load_from(default_path).await?,
        None => {
            debug!("No {} found, using defaults", default_path.display());
            Config::default()
        }
    };

    Ok(config.apply_overrides(lookup))
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    Config::from_yaml_str(&config_str)
}
