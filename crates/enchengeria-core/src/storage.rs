use std::collections::HashMap;

use crate::error::StorageError;

pub const FAVORITES_KEY: &str = "enchengeria-favorites";
pub const HISTORY_KEY: &str = "enchengeria-history";
pub const SEARCH_COUNTS_KEY: &str = "enchengeria-search-counts";
pub const WORD_OF_DAY_KEY: &str = "enchengeria-wotd";

/// Durable string key-value slots holding the user state
pub trait Storage: Send {
    /// Read a slot, `None` when it was never written
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// In-process storage, lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
