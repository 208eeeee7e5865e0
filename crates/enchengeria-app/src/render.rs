use std::io::{self, Write};

use enchengeria_core::query::result_summary;
use enchengeria_types::{AppEvent, DisplayResult};

pub const NO_FAVORITES: &str = "No favorites yet. Star some words to save them here!";
pub const NO_WORD_OF_DAY: &str = "No word of the day available.";

/// Writes app events as plain text
pub struct Renderer {
    max_results: usize,
}

impl Renderer {
    /// `max_results` of 0 renders every row
    pub fn new(max_results: usize) -> Self {
        let max_results = if max_results == 0 {
            usize::MAX
        } else {
            max_results
        };
        Self { max_results }
    }

    pub fn render(&self, out: &mut impl Write, event: &AppEvent) -> io::Result<()> {
        match event {
            AppEvent::ShowResults { query, results } => self.render_results(out, query, results),
            AppEvent::ShowEntry(entry) => render_entry(out, entry),
            AppEvent::ShowFavorites(favorites) => self.render_favorites(out, favorites),
            AppEvent::ShowWordOfDay(Some(entry)) => {
                writeln!(out, "Word of the day")?;
                render_entry(out, entry)
            }
            AppEvent::ShowWordOfDay(None) => writeln!(out, "{NO_WORD_OF_DAY}"),
            AppEvent::ShowList { title, items } => render_list(out, title, items),
            AppEvent::ShowMessage(message) => writeln!(out, "{message}"),
            AppEvent::UiEvent(_) | AppEvent::Shutdown => Ok(()),
        }
    }

    fn render_results(
        &self,
        out: &mut impl Write,
        query: &str,
        results: &[DisplayResult],
    ) -> io::Result<()> {
        if query.trim().is_empty() && !results.is_empty() {
            writeln!(out, "{} entries", results.len())?;
        } else {
            writeln!(out, "{}", result_summary(results.len(), query))?;
        }

        self.render_rows(out, results)
    }

    fn render_favorites(&self, out: &mut impl Write, favorites: &[DisplayResult]) -> io::Result<()> {
        if favorites.is_empty() {
            return writeln!(out, "{NO_FAVORITES}");
        }

        writeln!(out, "Favorites ({})", favorites.len())?;
        self.render_rows(out, favorites)
    }

    fn render_rows(&self, out: &mut impl Write, rows: &[DisplayResult]) -> io::Result<()> {
        for row in rows.iter().take(self.max_results) {
            render_row(out, row)?;
        }

        if rows.len() > self.max_results {
            writeln!(out, "  ... and {} more", rows.len() - self.max_results)?;
        }
        Ok(())
    }
}

fn star(entry: &DisplayResult) -> &'static str {
    if entry.is_favorite { "*" } else { " " }
}

/// One summary line per result
fn render_row(out: &mut impl Write, entry: &DisplayResult) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} ({}) sw: {} | en: {}",
        star(entry),
        entry.headword,
        entry.ipa,
        entry.part_of_speech,
        entry.kiswahili,
        entry.english
    )
}

pub fn render_entry(out: &mut impl Write, entry: &DisplayResult) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {} ({})",
        star(entry),
        entry.headword,
        entry.ipa,
        entry.part_of_speech
    )?;
    writeln!(out, "    Kiswahili: {}", entry.kiswahili)?;
    writeln!(out, "    English:   {}", entry.english)?;
    if !entry.example.is_empty() {
        writeln!(out, "    Example:   {}", entry.example)?;
    }
    Ok(())
}

pub fn render_list(out: &mut impl Write, title: &str, items: &[String]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if items.is_empty() {
        return writeln!(out, "  (none)");
    }

    for item in items {
        writeln!(out, "  {item}")?;
    }
    Ok(())
}
