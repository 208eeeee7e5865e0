use crate::options::{LanguageScope, SortMode};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowResults {
        query: String,
        results: Vec<DisplayResult>,
    },
    ShowEntry(DisplayResult),
    ShowFavorites(Vec<DisplayResult>),
    ShowWordOfDay(Option<DisplayResult>),
    ShowList {
        title: String,
        items: Vec<String>,
    },
    ShowMessage(String),
    Shutdown,
}

/// Entry as rendered by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub headword: String,
    pub ipa: String,
    pub part_of_speech: String,
    pub kiswahili: String,
    pub english: String,
    pub example: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Query text changed, nothing recorded
    SearchText(String),
    /// Query submitted, recorded in history
    Submit(String),
    SetLanguageScope(LanguageScope),
    SetPartOfSpeech(String),
    SetSortMode(SortMode),
    ResetFilters,
    ToggleFavorite(String),
    ListFavorites,
    ListHistory,
    ListPartsOfSpeech,
    WordOfDay,
    SelectEntry(String),
    CopyEntry(String),
    PlayAudio(String),
    Close,
}
