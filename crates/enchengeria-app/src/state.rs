use std::sync::Arc;

use enchengeria_config::Config;
use enchengeria_core::{MemoryStorage, QueryEngine, Storage};
use enchengeria_io::FileStorage;
use enchengeria_lang_ekegusii::EkegusiiLoader;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }
}

/// Load the dictionary and user state described by `config`
pub fn build_engine(config: &Config, ephemeral: bool) -> QueryEngine {
    let dictionary = if config.dictionary.enabled {
        EkegusiiLoader::load_with_additional(&config.dictionary.additional_paths)
    } else {
        tracing::warn!("Additional dictionaries disabled, using embedded word list only");
        EkegusiiLoader::load_with_additional(&[])
    };

    let mut engine = QueryEngine::new(Arc::new(dictionary), open_storage(config, ephemeral));
    engine.set_language_scope(config.ui.default_scope);
    engine.set_sort_mode(config.ui.default_sort);
    engine
}

fn open_storage(config: &Config, ephemeral: bool) -> Box<dyn Storage> {
    if ephemeral || !config.storage.persist {
        tracing::info!("User state kept in memory for this session");
        return Box::new(MemoryStorage::new());
    }

    let dir = config.storage.resolved_data_dir();
    match FileStorage::open(&dir) {
        Ok(storage) => {
            tracing::info!("User state stored in {}", storage.dir().display());
            Box::new(storage)
        }
        Err(e) => {
            tracing::warn!(
                "Cannot use {} for user state, falling back to memory: {}",
                dir.display(),
                e
            );
            Box::new(MemoryStorage::new())
        }
    }
}
