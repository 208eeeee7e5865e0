use enchengeria_types::{LanguageScope, SortMode};
use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    50
}

fn default_show_word_of_day() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Rows rendered per result list, 0 for no limit
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Show the word of the day when the interactive session starts
    #[serde(default = "default_show_word_of_day")]
    pub show_word_of_day: bool,
    pub default_scope: LanguageScope,
    pub default_sort: SortMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            show_word_of_day: default_show_word_of_day(),
            default_scope: LanguageScope::default(),
            default_sort: SortMode::default(),
        }
    }
}
