use enchengeria_core::{Entry, QueryEngine};
use enchengeria_types::AppEvent;

fn not_found(headword: &str) -> Vec<AppEvent> {
    vec![AppEvent::ShowMessage(format!("No entry named '{headword}'"))]
}

pub fn handle_select_entry(engine: &QueryEngine, headword: &str) -> Vec<AppEvent> {
    match engine.lookup(headword) {
        Some(entry) => vec![AppEvent::ShowEntry(
            entry.to_display_result(engine.is_favorite(headword)),
        )],
        None => not_found(headword),
    }
}

/// Copy through `copy`, reporting failure to the user instead of bubbling it up
pub fn handle_copy_entry<F>(engine: &QueryEngine, headword: &str, copy: F) -> Vec<AppEvent>
where
    F: FnOnce(&Entry) -> anyhow::Result<()>,
{
    let Some(entry) = engine.lookup(headword) else {
        return not_found(headword);
    };

    let message = match copy(entry) {
        Ok(()) => format!("Copied '{headword}' to clipboard"),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {}", e);
            format!("Could not copy '{headword}': {e}")
        }
    };

    vec![AppEvent::ShowMessage(message)]
}

pub fn handle_play_audio(engine: &QueryEngine, headword: &str) -> Vec<AppEvent> {
    let Some(entry) = engine.lookup(headword) else {
        return not_found(headword);
    };

    // Playback is not wired up yet
    tracing::debug!("Audio requested: {}", entry.audio_path());
    vec![AppEvent::ShowMessage("Audio file not yet available".to_string())]
}
