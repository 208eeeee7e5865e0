use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::dictionary::Entry;

/// Cached word of the day. Stored as `{ "date": ..., "word": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfDay {
    pub date: String,
    #[serde(rename = "word")]
    pub entry: Entry,
}

impl WordOfDay {
    pub fn new(date: NaiveDate, entry: Entry) -> Self {
        Self {
            date: date_key(date),
            entry,
        }
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date_key(date)
    }
}

/// Local calendar date as a cache key, e.g. `Sat Oct 17 2026`
pub fn date_key(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Pick one candidate uniformly at random
pub fn pick<'a, R: Rng + ?Sized>(candidates: &[&'a Entry], rng: &mut R) -> Option<&'a Entry> {
    candidates.choose(rng).copied()
}
