pub mod index;
pub mod search;
pub mod stats;
pub mod version;

use anyhow::Context;
use sakuin_store::{ManagerConfig, Paths};
use std::path::PathBuf;

/// Explicit config file, else ~/.sakuin/config.json when present, else defaults
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<ManagerConfig> {
    if let Some(path) = path {
        return ManagerConfig::load(std::path::Path::new(path))
            .with_context(|| format!("failed to load config {path}"));
    }
    let default_path = Paths::new()?.config_path();
    if default_path.exists() {
        return Ok(ManagerConfig::load(&default_path)?);
    }
    Ok(ManagerConfig::new())
}

/// Explicit index cache path, else ~/.sakuin/index.json
pub(crate) fn index_path(path: Option<&str>) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(Paths::new()?.index_cache_path()),
    }
}
