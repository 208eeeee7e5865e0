pub mod options;
pub mod types;

pub use options::{LanguageScope, ParseOptionError, SortMode};
pub use types::{AppEvent, DisplayResult, UiEvent};
