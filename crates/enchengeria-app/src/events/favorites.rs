use enchengeria_core::QueryEngine;
use enchengeria_types::AppEvent;

use super::search::to_display;

pub fn handle_toggle_favorite(engine: &mut QueryEngine, headword: String) -> Vec<AppEvent> {
    if engine.lookup(&headword).is_none() && !engine.is_favorite(&headword) {
        return vec![AppEvent::ShowMessage(format!(
            "No entry named '{headword}'"
        ))];
    }

    let message = if engine.toggle_favorite(&headword) {
        format!("Added '{headword}' to favorites")
    } else {
        format!("Removed '{headword}' from favorites")
    };

    vec![AppEvent::ShowMessage(message)]
}

pub fn handle_list_favorites(engine: &QueryEngine) -> Vec<AppEvent> {
    let favorites = to_display(engine, engine.favorite_entries());
    vec![AppEvent::ShowFavorites(favorites)]
}
