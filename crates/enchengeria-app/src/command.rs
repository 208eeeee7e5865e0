use enchengeria_types::{LanguageScope, SortMode, UiEvent};

pub const HELP: &str = "\
Type a word to search, or one of:
  /scope <all|ekegusii|kiswahili|english>
  /pos [part of speech]     empty clears the filter
  /sort <alphabetical|recent|popular>
  /reset                    clear scope, part of speech and sort
  /fav <headword>           toggle a favorite
  /favs                     list favorites
  /history                  recent searches
  /wotd                     word of the day
  /show <headword>          full entry
  /copy <headword>          copy entry to clipboard
  /play <headword>          play pronunciation
  /pos-list                 parts of speech in the dictionary
  /help
  /quit";

/// One line typed at the interactive prompt
#[derive(Debug, Clone)]
pub enum Input {
    Event(UiEvent),
    Help,
    Empty,
}

/// Anything not starting with `/` is submitted as typed, surrounding spaces
/// included, so history keeps the raw query.
pub fn parse_input(line: &str) -> Result<Input, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Input::Empty);
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return Ok(Input::Event(UiEvent::Submit(line.to_string())));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    let event = match name {
        "scope" => UiEvent::SetLanguageScope(arg.parse::<LanguageScope>().map_err(|e| e.to_string())?),
        "sort" => UiEvent::SetSortMode(arg.parse::<SortMode>().map_err(|e| e.to_string())?),
        "pos" => UiEvent::SetPartOfSpeech(arg.to_string()),
        "reset" => UiEvent::ResetFilters,
        "fav" => UiEvent::ToggleFavorite(required(name, arg)?),
        "favs" => UiEvent::ListFavorites,
        "history" => UiEvent::ListHistory,
        "wotd" => UiEvent::WordOfDay,
        "show" => UiEvent::SelectEntry(required(name, arg)?),
        "copy" => UiEvent::CopyEntry(required(name, arg)?),
        "play" => UiEvent::PlayAudio(required(name, arg)?),
        "pos-list" => UiEvent::ListPartsOfSpeech,
        "quit" | "exit" => UiEvent::Close,
        "help" | "?" => return Ok(Input::Help),
        _ => return Err(format!("Unknown command: /{name} (try /help)")),
    };

    Ok(Input::Event(event))
}

fn required(name: &str, arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        return Err(format!("Usage: /{name} <headword>"));
    }
    Ok(arg.to_string())
}
