use std::collections::BTreeSet;

use enchengeria_types::{LanguageScope, SortMode};
use serde::{Deserialize, Serialize};

use crate::collation::CollationKey;
use crate::dictionary::Entry;
use crate::history::SearchCounts;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Current search and filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub query: String,
    pub scope: LanguageScope,
    /// Exact part of speech, empty for no filter
    pub part_of_speech: String,
    pub sort: SortMode,
}

impl Filters {
    /// Restore scope, part of speech and sort. The query text is kept.
    pub fn reset(&mut self) {
        self.scope = LanguageScope::default();
        self.part_of_speech.clear();
        self.sort = SortMode::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.part_of_speech.is_empty()
            || self.scope != LanguageScope::default()
            || self.sort != SortMode::default()
    }
}

/// Case-insensitive substring match of an already lower-cased needle
pub fn matches_query(entry: &Entry, needle: &str, scope: LanguageScope) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    match scope {
        LanguageScope::Ekegusii => contains(&entry.headword) || contains(&entry.example),
        LanguageScope::Kiswahili => contains(&entry.kiswahili),
        LanguageScope::English => contains(&entry.english),
        LanguageScope::All => {
            contains(&entry.headword)
                || contains(&entry.kiswahili)
                || contains(&entry.english)
                || contains(&entry.example)
        }
    }
}

/// Filter and sort `entries` without touching the input order.
///
/// Popular sort reads `counts` by lower-cased headword, so an entry only gains
/// rank when its headword itself was searched.
pub fn compute_results<'a>(
    entries: &'a [Entry],
    filters: &Filters,
    counts: &SearchCounts,
) -> Vec<&'a Entry> {
    let mut results: Vec<&Entry> = match DefaultPreprocessor.process(&filters.query) {
        Some(needle) => entries
            .iter()
            .filter(|e| matches_query(e, &needle, filters.scope))
            .collect(),
        None => entries.iter().collect(),
    };

    if !filters.part_of_speech.is_empty() {
        results.retain(|e| e.part_of_speech == filters.part_of_speech);
    }

    match filters.sort {
        SortMode::Alphabetical => results.sort_by_cached_key(|e| CollationKey::new(&e.headword)),
        // Stable, so ties keep dataset order. Callers should not rely on that.
        SortMode::Popular => {
            results.sort_by(|a, b| counts.get(&b.headword).cmp(&counts.get(&a.headword)))
        }
        SortMode::Recent => {}
    }

    results
}

/// Distinct parts of speech across `entries`, sorted
pub fn distinct_parts_of_speech(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.part_of_speech.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn result_summary(count: usize, query: &str) -> String {
    if count == 0 {
        return "No results found. Try adjusting your filters or search terms.".to_string();
    }

    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} result{plural} for \"{query}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry, headwords, sample_entries};

    fn filters(query: &str, scope: LanguageScope, sort: SortMode) -> Filters {
        Filters {
            query: query.to_string(),
            scope,
            part_of_speech: String::new(),
            sort,
        }
    }

    #[test]
    fn test_query_matches_english_translation() {
        let entries = vec![
            entry("mogaka", "noun", "mzee", "old man", ""),
            entry("mwomba", "noun", "maskini", "poor person", ""),
        ];

        let results = compute_results(
            &entries,
            &filters("man", LanguageScope::All, SortMode::Alphabetical),
            &SearchCounts::default(),
        );
        assert_eq!(headwords(results), vec!["mogaka"]);
    }

    #[test]
    fn test_empty_query_sorts_alphabetically() {
        let entries = vec![
            entry("mwomba", "noun", "maskini", "poor person", ""),
            entry("mogaka", "noun", "mzee", "old man", ""),
        ];

        let results = compute_results(&entries, &Filters::default(), &SearchCounts::default());
        assert_eq!(headwords(results), vec!["mogaka", "mwomba"]);
        // Input is untouched
        assert_eq!(headwords(&entries), vec!["mwomba", "mogaka"]);
    }

    #[test]
    fn test_blank_query_behaves_as_empty() {
        let entries = sample_entries();
        let results = compute_results(
            &entries,
            &filters("   ", LanguageScope::English, SortMode::Recent),
            &SearchCounts::default(),
        );
        assert_eq!(results.len(), entries.len());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let entries = sample_entries();
        let results = compute_results(
            &entries,
            &filters("  WATER ", LanguageScope::All, SortMode::Recent),
            &SearchCounts::default(),
        );
        assert_eq!(headwords(results), vec!["amache"]);
    }

    #[test]
    fn test_scope_selects_searched_fields() {
        let entries = sample_entries();
        let counts = SearchCounts::default();

        // "omonto" appears as a headword and inside the example of "buya"
        let ekegusii = compute_results(
            &entries,
            &filters("omonto", LanguageScope::Ekegusii, SortMode::Recent),
            &counts,
        );
        assert_eq!(headwords(ekegusii), vec!["omonto", "buya"]);

        // Headwords are not searched under a translation scope
        let english = compute_results(
            &entries,
            &filters("omonto", LanguageScope::English, SortMode::Recent),
            &counts,
        );
        assert!(english.is_empty());

        let kiswahili = compute_results(
            &entries,
            &filters("maji", LanguageScope::Kiswahili, SortMode::Recent),
            &counts,
        );
        assert_eq!(headwords(kiswahili), vec!["amache"]);

        let english = compute_results(
            &entries,
            &filters("maji", LanguageScope::English, SortMode::Recent),
            &counts,
        );
        assert!(english.is_empty());
    }

    #[test]
    fn test_every_result_contains_query_in_scoped_field() {
        let entries = sample_entries();
        let counts = SearchCounts::default();

        for scope in LanguageScope::ALL {
            for query in ["o", "ma", "person", "Omonto", "x"] {
                let needle = query.to_lowercase();
                for e in compute_results(&entries, &filters(query, scope, SortMode::Recent), &counts) {
                    let fields: Vec<&str> = match scope {
                        LanguageScope::All => vec![
                            e.headword.as_str(),
                            e.kiswahili.as_str(),
                            e.english.as_str(),
                            e.example.as_str(),
                        ],
                        LanguageScope::Ekegusii => vec![e.headword.as_str(), e.example.as_str()],
                        LanguageScope::Kiswahili => vec![e.kiswahili.as_str()],
                        LanguageScope::English => vec![e.english.as_str()],
                    };
                    assert!(
                        fields.iter().any(|f| f.to_lowercase().contains(&needle)),
                        "{} does not contain {query} under {scope}",
                        e.headword
                    );
                }
            }
        }
    }

    #[test]
    fn test_part_of_speech_filter_narrows() {
        let entries = sample_entries();
        let counts = SearchCounts::default();
        let mut f = filters("o", LanguageScope::All, SortMode::Recent);

        let before = compute_results(&entries, &f, &counts);
        f.part_of_speech = "noun".to_string();
        let after = compute_results(&entries, &f, &counts);

        assert!(after.len() < before.len());
        assert!(after.iter().all(|e| before.contains(e)));
        assert!(after.iter().all(|e| e.part_of_speech == "noun"));
    }

    #[test]
    fn test_part_of_speech_filter_is_case_sensitive() {
        let entries = sample_entries();
        let f = Filters {
            part_of_speech: "Noun".to_string(),
            ..Filters::default()
        };
        assert!(compute_results(&entries, &f, &SearchCounts::default()).is_empty());
    }

    #[test]
    fn test_recent_keeps_dataset_order() {
        let entries = sample_entries();
        let results = compute_results(
            &entries,
            &filters("", LanguageScope::All, SortMode::Recent),
            &SearchCounts::default(),
        );
        assert_eq!(headwords(results), headwords(&entries));
    }

    #[test]
    fn test_popular_sorts_by_headword_search_count() {
        let entries = sample_entries();
        let mut counts = SearchCounts::default();
        counts.increment("AMACHE");
        counts.increment("amache");
        counts.increment("buya");

        let results = compute_results(
            &entries,
            &filters("", LanguageScope::All, SortMode::Popular),
            &counts,
        );
        // Ties keep dataset order with the current stable sort
        assert_eq!(
            headwords(results),
            vec!["amache", "buya", "omonto", "mogaka", "ogokora", "mwomba"]
        );
    }

    #[test]
    fn test_popular_ignores_searches_for_translations() {
        // Counts are keyed by query text, so searching "water" many times
        // never lifts "amache" in the popular ordering.
        let entries = sample_entries();
        let mut counts = SearchCounts::default();
        for _ in 0..5 {
            counts.increment("water");
        }
        counts.increment("mwomba");

        let results = compute_results(
            &entries,
            &filters("", LanguageScope::All, SortMode::Popular),
            &counts,
        );
        assert_eq!(results[0].headword, "mwomba");
        assert_eq!(results[1].headword, "omonto");
    }

    #[test]
    fn test_distinct_parts_of_speech_sorted() {
        assert_eq!(
            distinct_parts_of_speech(&sample_entries()),
            vec!["adjective", "noun", "verb"]
        );
        assert!(distinct_parts_of_speech(&[]).is_empty());
    }

    #[test]
    fn test_reset_keeps_query() {
        let mut f = Filters {
            query: "amache".to_string(),
            scope: LanguageScope::Kiswahili,
            part_of_speech: "noun".to_string(),
            sort: SortMode::Popular,
        };
        assert!(f.has_active_filters());

        f.reset();
        assert!(!f.has_active_filters());
        assert_eq!(f.query, "amache");
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(1, "man"), "Found 1 result for \"man\"");
        assert_eq!(result_summary(3, "o"), "Found 3 results for \"o\"");
        assert!(result_summary(0, "zzz").starts_with("No results found."));
    }
}
