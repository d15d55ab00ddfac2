//! Default locations for cached index and config files

use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".sakuin";

/// Resolves standard sakuin paths under the home directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(DATA_DIR_NAME),
        })
    }

    /// Rooted somewhere other than the home directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get index.json path
    pub fn index_cache_path(&self) -> PathBuf {
        self.data_dir.join("index.json")
    }

    /// Get config.json path
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }
}
