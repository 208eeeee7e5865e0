use enchengeria_core::QueryEngine;
use enchengeria_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

pub mod entry;
pub mod favorites;
pub mod search;
pub mod word_of_day;

use entry::{handle_copy_entry, handle_play_audio, handle_select_entry};
use favorites::{handle_list_favorites, handle_toggle_favorite};
use search::{handle_history, handle_parts_of_speech, handle_search_text, handle_submit, show_results};
use word_of_day::handle_word_of_day;

/// App's main loop. Owns the engine, so every mutation happens here one
/// event at a time.
pub async fn event_loop(
    mut engine: QueryEngine,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!(
        "[EVENT_LOOP] Starting with {} entries",
        engine.dictionary().metadata().entry_count
    );

    loop {
        let Ok(event) = ui_to_app_rx.recv().await else {
            tracing::debug!("[EVENT_LOOP] UI channel closed");
            break;
        };

        let AppEvent::UiEvent(ui_event) = event else {
            // Render events only travel towards the UI
            continue;
        };

        tracing::debug!("[EVENT_LOOP] {:?}", ui_event);
        let closing = matches!(ui_event, UiEvent::Close);

        for reply in handle_ui_event(&mut engine, ui_event) {
            app_to_ui_tx.send(reply).await?;
        }

        if closing {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Apply one UI event to the engine and return what the UI should render
pub fn handle_ui_event(engine: &mut QueryEngine, event: UiEvent) -> Vec<AppEvent> {
    match event {
        UiEvent::SearchText(text) => handle_search_text(engine, text),
        UiEvent::Submit(text) => handle_submit(engine, text),
        UiEvent::SetLanguageScope(scope) => {
            engine.set_language_scope(scope);
            vec![show_results(engine)]
        }
        UiEvent::SetPartOfSpeech(part_of_speech) => {
            engine.set_part_of_speech(part_of_speech);
            vec![show_results(engine)]
        }
        UiEvent::SetSortMode(sort) => {
            engine.set_sort_mode(sort);
            vec![show_results(engine)]
        }
        UiEvent::ResetFilters => {
            engine.reset_filters();
            vec![show_results(engine)]
        }
        UiEvent::ToggleFavorite(headword) => handle_toggle_favorite(engine, headword),
        UiEvent::ListFavorites => handle_list_favorites(engine),
        UiEvent::ListHistory => handle_history(engine),
        UiEvent::ListPartsOfSpeech => handle_parts_of_speech(engine),
        UiEvent::WordOfDay => {
            let today = chrono::Local::now().date_naive();
            handle_word_of_day(engine, today, &mut rand::thread_rng())
        }
        UiEvent::SelectEntry(headword) => handle_select_entry(engine, &headword),
        UiEvent::CopyEntry(headword) => {
            handle_copy_entry(engine, &headword, enchengeria_io::clipboard::copy_entry)
        }
        UiEvent::PlayAudio(headword) => handle_play_audio(engine, &headword),
        UiEvent::Close => vec![AppEvent::Shutdown],
    }
}
