use serde::{Deserialize, Serialize};

use crate::dictionary::Entry;

/// Favorite headwords in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Favorites(Vec<String>);

impl Favorites {
    /// Remove `headword` if present, else append it. Returns whether it is now a favorite.
    ///
    /// Headwords are not checked against the dictionary.
    pub fn toggle(&mut self, headword: &str) -> bool {
        if self.contains(headword) {
            self.0.retain(|f| f != headword);
            false
        } else {
            self.0.push(headword.to_string());
            true
        }
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.0.iter().any(|f| f == headword)
    }

    pub fn headwords(&self) -> &[String] {
        &self.0
    }

    /// Entries for the stored headwords, in dictionary order.
    /// Headwords missing from `entries` are skipped.
    pub fn entries<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.contains(&e.headword)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Favorites {
    fn from(raw: Vec<String>) -> Self {
        let mut headwords: Vec<String> = Vec::with_capacity(raw.len());
        for headword in raw {
            if !headwords.contains(&headword) {
                headwords.push(headword);
            }
        }
        Self(headwords)
    }
}
