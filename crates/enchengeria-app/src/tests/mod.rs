use std::sync::Arc;

use enchengeria_core::{MemoryStorage, QueryEngine, Storage};
use enchengeria_lang_ekegusii::EkegusiiLoader;


fn test_engine() -> QueryEngine {
    engine_with_storage(Box::new(MemoryStorage::new()))
}

fn engine_with_storage(storage: Box<dyn Storage>) -> QueryEngine {
    let dictionary = EkegusiiLoader::load_embedded().expect("embedded dataset");
    QueryEngine::new(Arc::new(dictionary), storage)
}
