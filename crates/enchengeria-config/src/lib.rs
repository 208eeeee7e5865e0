use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod storage;
pub mod ui;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,

    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        let mut storage = StorageConfig::default();
        storage.data_dir = env::var("ENCHENGERIA_DATA_DIR").ok();

        let mut ui = UiConfig::default();
        if let Some(max_results) = env::var("ENCHENGERIA_MAX_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            ui.max_results = max_results;
        }

        let log_level = env::var("ENCHENGERIA_LOG").unwrap_or_else(|_| default_log_level());

        Config {
            dictionary: DictionaryConfig::default(),
            storage,
            ui,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
