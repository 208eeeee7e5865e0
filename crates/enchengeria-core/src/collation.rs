//! Locale-aware headword ordering.
//!
//! Strings compare first on their base letters (accents and case removed),
//! then on accents, then on case with lower case first. Byte order is only
//! the final tie-break, so `Égo` sorts next to `ego` instead of after `z`.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Precomputed sort key for one string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<bool>,
    original: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let primary = text
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();

        let secondary = text.nfd().flat_map(char::to_lowercase).collect();

        // Upper case sorts after lower case at the same position
        let tertiary = text.nfd().map(char::is_uppercase).collect();

        Self {
            primary,
            secondary,
            tertiary,
            original: text.to_string(),
        }
    }
}
