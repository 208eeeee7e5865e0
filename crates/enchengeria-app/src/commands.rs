use std::io::Write;

use enchengeria_core::QueryEngine;
use enchengeria_types::UiEvent;

use crate::cli::{Command, ProfileAction};
use crate::events::handle_ui_event;
use crate::profile::ProfileStore;
use crate::render::Renderer;

/// Run a one-shot subcommand against `engine`, rendering to `out`
pub fn run_command(
    engine: &mut QueryEngine,
    command: Command,
    renderer: &Renderer,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let event = match command {
        Command::Search {
            query,
            scope,
            pos,
            sort,
            record,
        } => {
            // Filters go straight onto the engine so only the final result set renders
            if let Some(scope) = scope {
                engine.set_language_scope(scope);
            }
            if let Some(pos) = pos {
                engine.set_part_of_speech(pos);
            }
            if let Some(sort) = sort {
                engine.set_sort_mode(sort);
            }

            if record {
                UiEvent::Submit(query)
            } else {
                UiEvent::SearchText(query)
            }
        }
        Command::Show { headword } => UiEvent::SelectEntry(headword),
        Command::Favorite { headword } => UiEvent::ToggleFavorite(headword),
        Command::Favorites => UiEvent::ListFavorites,
        Command::History => UiEvent::ListHistory,
        Command::WordOfDay => UiEvent::WordOfDay,
        Command::Pos => UiEvent::ListPartsOfSpeech,
        Command::Copy { headword } => UiEvent::CopyEntry(headword),
        Command::Interactive | Command::Profile { .. } => {
            anyhow::bail!("not a one-shot dictionary command")
        }
    };

    for reply in handle_ui_event(engine, event) {
        renderer.render(out, &reply)?;
    }
    out.flush()?;
    Ok(())
}

/// Profile management, run before any dictionary is loaded
pub fn run_profile_command(
    store: &ProfileStore,
    action: ProfileAction,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match action {
        ProfileAction::Add { name } => {
            let path = store.add_profile_from_default(&name)?;
            writeln!(out, "Created profile '{}' at {}", name, path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use enchengeria_core::MemoryStorage;
    use enchengeria_lang_ekegusii::EkegusiiLoader;
    use enchengeria_types::{LanguageScope, SortMode};

    use super::*;

    fn engine() -> QueryEngine {
        let dictionary = EkegusiiLoader::load_embedded().unwrap();
        QueryEngine::new(Arc::new(dictionary), Box::new(MemoryStorage::new()))
    }

    fn run(engine: &mut QueryEngine, command: Command) -> String {
        let mut out = Vec::new();
        run_command(engine, command, &Renderer::new(50), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn search(query: &str, scope: Option<LanguageScope>, record: bool) -> Command {
        Command::Search {
            query: query.to_string(),
            scope,
            pos: None,
            sort: None,
            record,
        }
    }

    #[test]
    fn test_search_renders_matches() {
        let mut engine = engine();
        let text = run(&mut engine, search("water", Some(LanguageScope::English), false));

        assert!(text.starts_with("Found 1 result for \"water\""));
        assert!(text.contains("amache"));
        assert!(engine.search_history().is_empty());
    }

    #[test]
    fn test_recorded_search_shows_in_history() {
        let mut engine = engine();
        run(&mut engine, search("Mogaka", None, true));
        run(&mut engine, search("mogaka", None, true));

        let text = run(&mut engine, Command::History);
        assert!(text.starts_with("Recent searches\n"));
        assert!(text.contains("mogaka (2)"));
        assert!(text.contains("Mogaka (2)"));
    }

    #[test]
    fn test_search_applies_filters() {
        let mut engine = engine();
        let text = run(
            &mut engine,
            Command::Search {
                query: String::new(),
                scope: None,
                pos: Some("verb".to_string()),
                sort: Some(SortMode::Recent),
                record: false,
            },
        );

        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("ogokora"));
        assert!(rows[1].contains("ogosoma"));
    }

    #[test]
    fn test_favorite_roundtrip() {
        let mut engine = engine();
        assert_eq!(
            run(&mut engine, Command::Favorites).trim_end(),
            crate::render::NO_FAVORITES
        );

        let added = run(
            &mut engine,
            Command::Favorite {
                headword: "omogaka".to_string(),
            },
        );
        assert_eq!(added.trim_end(), "Added 'omogaka' to favorites");
        assert!(run(&mut engine, Command::Favorites).contains("* omogaka"));

        let removed = run(
            &mut engine,
            Command::Favorite {
                headword: "omogaka".to_string(),
            },
        );
        assert_eq!(removed.trim_end(), "Removed 'omogaka' from favorites");
    }

    #[test]
    fn test_unknown_headword_is_reported() {
        let mut engine = engine();
        let text = run(
            &mut engine,
            Command::Show {
                headword: "nope".to_string(),
            },
        );
        assert_eq!(text.trim_end(), "No entry named 'nope'");
    }

    #[test]
    fn test_word_of_day_is_stable() {
        let mut engine = engine();
        let first = run(&mut engine, Command::WordOfDay);
        let second = run(&mut engine, Command::WordOfDay);

        assert!(first.starts_with("Word of the day\n"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_interactive_is_not_one_shot() {
        let mut engine = engine();
        let mut out = Vec::new();
        assert!(run_command(&mut engine, Command::Interactive, &Renderer::new(5), &mut out).is_err());
    }

    #[test]
    fn test_profile_add_writes_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut out = Vec::new();

        run_profile_command(
            &store,
            ProfileAction::Add {
                name: "study".to_string(),
            },
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Created profile 'study' at "));
        assert!(dir.path().join("profiles").join("study.json").exists());
        assert!(store.load_user_profile("study").unwrap().dictionary.enabled);
    }
}
