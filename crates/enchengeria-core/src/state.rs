use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::favorites::Favorites;
use crate::history::{SearchCounts, SearchHistory};
use crate::storage::{
    FAVORITES_KEY, HISTORY_KEY, SEARCH_COUNTS_KEY, Storage, WORD_OF_DAY_KEY,
};
use crate::word_of_day::WordOfDay;

/// Persisted user state. Each field lives in its own storage slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub favorites: Favorites,
    pub history: SearchHistory,
    pub counts: SearchCounts,
    pub word_of_day: Option<WordOfDay>,
}

impl UserState {
    /// Read every slot. Missing, unreadable or malformed slots fall back to defaults.
    pub fn load(storage: &dyn Storage) -> Self {
        let state = Self {
            favorites: load_slot(storage, FAVORITES_KEY),
            history: load_slot(storage, HISTORY_KEY),
            counts: load_slot(storage, SEARCH_COUNTS_KEY),
            word_of_day: load_slot(storage, WORD_OF_DAY_KEY),
        };

        tracing::debug!(
            "Loaded user state: {} favorites, {} history entries",
            state.favorites.len(),
            state.history.len()
        );

        state
    }

    pub fn persist_favorites(&self, storage: &mut dyn Storage) {
        save_slot(storage, FAVORITES_KEY, &self.favorites);
    }

    /// History and counts are written back to back, not atomically
    pub fn persist_history(&self, storage: &mut dyn Storage) {
        save_slot(storage, HISTORY_KEY, &self.history);
        save_slot(storage, SEARCH_COUNTS_KEY, &self.counts);
    }

    pub fn persist_word_of_day(&self, storage: &mut dyn Storage) {
        if let Some(word_of_day) = &self.word_of_day {
            save_slot(storage, WORD_OF_DAY_KEY, word_of_day);
        }
    }
}

fn load_slot<T: DeserializeOwned + Default>(storage: &dyn Storage, key: &str) -> T {
    let raw = match storage.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!("Failed to read '{}', using defaults: {}", key, e);
            return T::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed value in '{}': {}", key, e);
        T::default()
    })
}

// Best effort: a failed write keeps the in-memory value
fn save_slot<T: Serialize + ?Sized>(storage: &mut dyn Storage, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize '{}': {}", key, e);
            return;
        }
    };

    if let Err(e) = storage.save(key, &json) {
        tracing::warn!("Failed to write '{}': {}", key, e);
    }
}
