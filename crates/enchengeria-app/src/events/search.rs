use enchengeria_core::{Entry, QueryEngine};
use enchengeria_types::{AppEvent, DisplayResult};

/// Current result set as display records
pub fn show_results(engine: &QueryEngine) -> AppEvent {
    let results = to_display(engine, engine.results());
    tracing::debug!(
        "Query '{}' ({}) matched {} entries",
        engine.filters().query,
        engine.filters().scope,
        results.len()
    );

    AppEvent::ShowResults {
        query: engine.filters().query.clone(),
        results,
    }
}

/// Live query change, nothing recorded
pub fn handle_search_text(engine: &mut QueryEngine, text: String) -> Vec<AppEvent> {
    engine.set_query(text);
    vec![show_results(engine)]
}

/// Submitted query, counted and added to history before the results go out
pub fn handle_submit(engine: &mut QueryEngine, text: String) -> Vec<AppEvent> {
    if !engine.record_search(&text) {
        tracing::debug!("Blank query submitted, not recorded");
    }

    engine.set_query(text);
    vec![show_results(engine)]
}

pub fn handle_history(engine: &QueryEngine) -> Vec<AppEvent> {
    let items = engine
        .search_history()
        .iter()
        .map(|query| format!("{} ({})", query, engine.search_count(query)))
        .collect();

    vec![AppEvent::ShowList {
        title: "Recent searches".to_string(),
        items,
    }]
}

pub fn handle_parts_of_speech(engine: &QueryEngine) -> Vec<AppEvent> {
    vec![AppEvent::ShowList {
        title: "Parts of speech".to_string(),
        items: engine.parts_of_speech(),
    }]
}

pub fn to_display(engine: &QueryEngine, entries: Vec<&Entry>) -> Vec<DisplayResult> {
    entries
        .into_iter()
        .map(|e| e.to_display_result(engine.is_favorite(&e.headword)))
        .collect()
}
