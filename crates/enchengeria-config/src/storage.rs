use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_persist() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Keep user state on disk; when false state lives in memory only
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Overrides the platform data directory
    pub data_dir: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            data_dir: None,
        }
    }
}

impl StorageConfig {
    /// Directory holding the persisted user state
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("enchengeria"),
        }
    }
}
