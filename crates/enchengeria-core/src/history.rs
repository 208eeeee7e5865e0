use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of remembered queries
pub const MAX_HISTORY: usize = 20;

/// Raw query strings, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    /// Move `query` to the front, dropping an older identical string
    pub fn push(&mut self, query: &str) {
        self.0.retain(|h| h != query);
        self.0.insert(0, query.to_string());
        self.0.truncate(MAX_HISTORY);
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SearchHistory {
    // Stored lists are cleaned up on load so the cap and uniqueness hold
    fn from(raw: Vec<String>) -> Self {
        let mut entries: Vec<String> = Vec::with_capacity(raw.len().min(MAX_HISTORY));
        for query in raw {
            if entries.len() == MAX_HISTORY {
                break;
            }
            if !entries.contains(&query) {
                entries.push(query);
            }
        }
        Self(entries)
    }
}

/// How often each query text was submitted, keyed by lower-cased text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u64>")]
pub struct SearchCounts(BTreeMap<String, u64>);

impl SearchCounts {
    pub fn get(&self, text: &str) -> u64 {
        self.0.get(&text.to_lowercase()).copied().unwrap_or(0)
    }

    /// Bump the count for `text` and return the new value, saturating at `u64::MAX`
    pub fn increment(&mut self, text: &str) -> u64 {
        let count = self.0.entry(text.to_lowercase()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, u64>> for SearchCounts {
    fn from(raw: BTreeMap<String, u64>) -> Self {
        let mut counts = BTreeMap::new();
        for (text, count) in raw {
            let merged = counts.entry(text.to_lowercase()).or_insert(0u64);
            *merged = merged.saturating_add(count);
        }
        Self(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_moves_existing_query_to_front() {
        let mut history = SearchHistory::default();
        history.push("amache");
        history.push("omonto");
        history.push("amache");

        assert_eq!(history.entries(), ["amache", "omonto"]);
    }

    #[test]
    fn test_dedup_is_exact_string() {
        let mut history = SearchHistory::default();
        history.push("Mogaka");
        history.push("mogaka");

        assert_eq!(history.entries(), ["mogaka", "Mogaka"]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = SearchHistory::default();
        for i in 0..50 {
            history.push(&format!("query {i}"));
            assert!(history.len() <= MAX_HISTORY);
        }

        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "query 49");
        assert_eq!(history.entries()[MAX_HISTORY - 1], "query 30");

        // Re-issuing does not grow the list
        history.push("query 35");
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "query 35");
    }

    #[test]
    fn test_loaded_history_is_cleaned() {
        let raw: Vec<String> = (0..30).map(|i| format!("q{}", i % 25)).collect();
        let json = serde_json::to_string(&raw).unwrap();
        let history: SearchHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "q0");
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let mut counts = SearchCounts::default();
        assert_eq!(counts.increment("Mogaka"), 1);
        assert_eq!(counts.increment("mogaka"), 2);

        assert_eq!(counts.get("MOGAKA"), 2);
        assert_eq!(counts.get("amache"), 0);
        assert!(counts.iter().all(|(k, _)| k == k.to_lowercase()));
    }

    #[test]
    fn test_counts_serialize_as_plain_object() {
        let mut counts = SearchCounts::default();
        counts.increment("Amache");

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"amache":1}"#);

        let loaded: SearchCounts = serde_json::from_str(r#"{"Amache": 2, "amache": 1}"#).unwrap();
        assert_eq!(loaded.get("amache"), 3);
    }

    #[test]
    fn test_huge_stored_counts_saturate() {
        let mut loaded: SearchCounts =
            serde_json::from_str(r#"{"Amache": 18446744073709551615, "amache": 1}"#).unwrap();
        assert_eq!(loaded.get("amache"), u64::MAX);

        assert_eq!(loaded.increment("AMACHE"), u64::MAX);
        assert_eq!(loaded.increment("buya"), 1);
    }
}
