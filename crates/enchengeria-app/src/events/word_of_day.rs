use chrono::NaiveDate;
use enchengeria_core::QueryEngine;
use enchengeria_types::AppEvent;
use rand::Rng;

pub fn handle_word_of_day<R: Rng + ?Sized>(
    engine: &mut QueryEngine,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<AppEvent> {
    // The stored word is a snapshot and may predate the loaded dataset
    let word = engine.word_of_day(today, rng).cloned();
    let display = word.map(|entry| entry.to_display_result(engine.is_favorite(&entry.headword)));

    vec![AppEvent::ShowWordOfDay(display)]
}
