use std::collections::HashMap;

use enchengeria_core::dictionary::{Dictionary, DictionaryMetadata, Entry, LoadError};

/// Ekegusii / Kiswahili / English word list
pub struct EkegusiiDictionary {
    entries: Vec<Entry>,
    headword_index: HashMap<String, usize>,
}

impl EkegusiiDictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            headword_index: HashMap::new(),
        }
    }

    /// Build from entries in declaration order. A repeated headword is kept in
    /// the list but lookups resolve to its first occurrence.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut headword_index = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            headword_index.entry(entry.headword.clone()).or_insert(idx);
        }

        Self {
            entries,
            headword_index,
        }
    }

    /// Load from a JSON array of entries
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let entries: Vec<Entry> = serde_json::from_str(json_str)?;

        if let Some(pos) = entries.iter().position(|e| e.headword.trim().is_empty()) {
            return Err(LoadError::InvalidFormat(format!(
                "entry {pos} has an empty headword"
            )));
        }

        Ok(Self::from_entries(entries))
    }

    /// Get the number of entries in the dictionary
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another dictionary into this one.
    /// An entry with a known headword replaces the old one in place; new
    /// headwords are appended.
    pub fn merge(mut self, other: EkegusiiDictionary) -> Self {
        for entry in other.entries {
            match self.headword_index.get(&entry.headword) {
                Some(&idx) => self.entries[idx] = entry,
                None => {
                    self.headword_index
                        .insert(entry.headword.clone(), self.entries.len());
                    self.entries.push(entry);
                }
            }
        }

        self
    }
}

impl Default for EkegusiiDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for EkegusiiDictionary {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Enchengeria".to_string(),
            version: "1.0".to_string(),
            language: "guz".to_string(),
            entry_count: self.entries.len(),
        }
    }

    fn lookup_exact(&self, headword: &str) -> Option<&Entry> {
        self.headword_index
            .get(headword)
            .and_then(|&idx| self.entries.get(idx))
    }
}
