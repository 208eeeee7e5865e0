use enchengeria_types::DisplayResult;
use serde::{Deserialize, Serialize};

use crate::query::distinct_parts_of_speech;

/// Dictionary lookup operations over a fixed, ordered word list
pub trait Dictionary: Send + Sync {
    /// All entries in declaration order
    fn entries(&self) -> &[Entry];

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    /// Find an entry by its exact headword
    fn lookup_exact(&self, headword: &str) -> Option<&Entry> {
        self.entries().iter().find(|e| e.headword == headword)
    }

    /// Distinct parts of speech, sorted
    fn parts_of_speech(&self) -> Vec<String> {
        distinct_parts_of_speech(self.entries())
    }
}

/// Individual dictionary entry
///
/// Field names on the wire follow the bundled dataset format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Ekegusii headword, the natural key
    #[serde(rename = "ekegusii")]
    pub headword: String,
    #[serde(default)]
    pub ipa: String,
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,
    #[serde(rename = "sw", default)]
    pub kiswahili: String,
    #[serde(rename = "en", default)]
    pub english: String,
    #[serde(rename = "ex", default)]
    pub example: String,
    /// Audio file name, not resolved by this crate
    #[serde(rename = "audio", default)]
    pub audio: String,
}

impl Entry {
    /// Text placed on the clipboard when an entry is copied
    pub fn clipboard_text(&self) -> String {
        format!(
            "{} [{}]\nKiswahili: {}\nEnglish: {}",
            self.headword, self.ipa, self.kiswahili, self.english
        )
    }

    /// Relative path the audio recording would be served from
    pub fn audio_path(&self) -> String {
        format!("audio/{}", self.audio)
    }

    /// Convert to a front-end display record
    pub fn to_display_result(&self, is_favorite: bool) -> DisplayResult {
        DisplayResult {
            headword: self.headword.clone(),
            ipa: self.ipa.clone(),
            part_of_speech: self.part_of_speech.clone(),
            kiswahili: self.kiswahili.clone(),
            english: self.english.clone(),
            example: self.example.clone(),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
