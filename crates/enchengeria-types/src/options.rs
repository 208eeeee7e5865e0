use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which fields a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageScope {
    /// Headword, both translations and the example
    #[default]
    All,
    /// Headword and example
    Ekegusii,
    Kiswahili,
    English,
}

impl LanguageScope {
    pub const ALL: [LanguageScope; 4] = [
        LanguageScope::All,
        LanguageScope::Ekegusii,
        LanguageScope::Kiswahili,
        LanguageScope::English,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageScope::All => "all",
            LanguageScope::Ekegusii => "ekegusii",
            LanguageScope::Kiswahili => "kiswahili",
            LanguageScope::English => "english",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageScope::All => "All Languages",
            LanguageScope::Ekegusii => "Ekegusii",
            LanguageScope::Kiswahili => "Kiswahili",
            LanguageScope::English => "English",
        }
    }
}

impl fmt::Display for LanguageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageScope {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == wanted)
            .ok_or_else(|| ParseOptionError::new("language scope", s))
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending by headword, locale-aware
    #[default]
    Alphabetical,
    /// Dataset declaration order
    Recent,
    /// Descending by recorded search count
    Popular,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Alphabetical, SortMode::Recent, SortMode::Popular];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "alphabetical",
            SortMode::Recent => "recent",
            SortMode::Popular => "popular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Alphabetical => "Alphabetical",
            SortMode::Recent => "Recently Added",
            SortMode::Popular => "Most Searched",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| ParseOptionError::new("sort mode", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
