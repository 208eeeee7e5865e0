use std::sync::Arc;

use chrono::NaiveDate;
use enchengeria_types::{LanguageScope, SortMode};
use rand::Rng;

use crate::dictionary::{Dictionary, Entry};
use crate::history::SearchCounts;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::query::{Filters, compute_results};
use crate::state::UserState;
use crate::storage::Storage;
use crate::word_of_day::{self, WordOfDay};

/// Search session over one dictionary, owning the filter selection and the
/// persisted user state. Every mutation is flushed to storage before returning.
pub struct QueryEngine {
    dictionary: Arc<dyn Dictionary>,
    storage: Box<dyn Storage>,
    state: UserState,
    filters: Filters,
}

impl QueryEngine {
    pub fn new(dictionary: Arc<dyn Dictionary>, storage: Box<dyn Storage>) -> Self {
        let state = UserState::load(storage.as_ref());

        Self {
            dictionary,
            storage,
            state,
            filters: Filters::default(),
        }
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dictionary.as_ref()
    }

    pub fn entries(&self) -> &[Entry] {
        self.dictionary.entries()
    }

    pub fn lookup(&self, headword: &str) -> Option<&Entry> {
        self.dictionary.lookup_exact(headword)
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    // Filters

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filters.query = text.into();
    }

    pub fn set_language_scope(&mut self, scope: LanguageScope) {
        self.filters.scope = scope;
    }

    pub fn set_part_of_speech(&mut self, part_of_speech: impl Into<String>) {
        self.filters.part_of_speech = part_of_speech.into();
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.filters.sort = sort;
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    /// Visible results for the current selection, recomputed on every call
    pub fn results(&self) -> Vec<&Entry> {
        compute_results(self.dictionary.entries(), &self.filters, &self.state.counts)
    }

    pub fn parts_of_speech(&self) -> Vec<String> {
        self.dictionary.parts_of_speech()
    }

    // Favorites

    /// Returns whether `headword` is a favorite after the toggle
    pub fn toggle_favorite(&mut self, headword: &str) -> bool {
        let added = self.state.favorites.toggle(headword);
        self.state.persist_favorites(self.storage.as_mut());

        tracing::debug!(
            "{} favorite '{}'",
            if added { "Added" } else { "Removed" },
            headword
        );
        added
    }

    pub fn is_favorite(&self, headword: &str) -> bool {
        self.state.favorites.contains(headword)
    }

    pub fn favorites(&self) -> &[String] {
        self.state.favorites.headwords()
    }

    pub fn favorite_entries(&self) -> Vec<&Entry> {
        self.state.favorites.entries(self.dictionary.entries())
    }

    // History

    /// Record a submitted query. Blank text is ignored and returns `false`.
    pub fn record_search(&mut self, text: &str) -> bool {
        if DefaultPreprocessor.process(text).is_none() {
            return false;
        }

        self.state.history.push(text);
        let count = self.state.counts.increment(text);
        self.state.persist_history(self.storage.as_mut());

        tracing::debug!("Recorded search '{}' (count {})", text, count);
        true
    }

    pub fn search_history(&self) -> &[String] {
        self.state.history.entries()
    }

    pub fn search_count(&self, text: &str) -> u64 {
        self.state.counts.get(text)
    }

    pub fn search_counts(&self) -> &SearchCounts {
        &self.state.counts
    }

    // Word of the day

    /// Today's word, picked once per calendar day from the current results.
    ///
    /// The pick depends on whatever filters are active at the first call of the
    /// day. Returns `None` without caching when there is nothing to pick from.
    pub fn word_of_day<R: Rng + ?Sized>(&mut self, today: NaiveDate, rng: &mut R) -> Option<&Entry> {
        let cached = self
            .state
            .word_of_day
            .as_ref()
            .is_some_and(|w| w.is_for(today));

        if !cached {
            let picked = {
                let candidates = self.results();
                word_of_day::pick(&candidates, rng).cloned()
            };

            let Some(entry) = picked else {
                tracing::debug!("No candidates for word of the day");
                return None;
            };

            tracing::info!("Word of the day for {}: {}", today, entry.headword);
            self.state.word_of_day = Some(WordOfDay::new(today, entry));
            self.state.persist_word_of_day(self.storage.as_mut());
        }

        self.state.word_of_day.as_ref().map(|w| &w.entry)
    }
}
