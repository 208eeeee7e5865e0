use arboard::Clipboard;
use enchengeria_core::Entry;

pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Put the headword, IPA and both translations on the system clipboard
pub fn copy_entry(entry: &Entry) -> Result<(), anyhow::Error> {
    copy_text(&entry.clipboard_text())?;
    tracing::debug!("Copied '{}' to clipboard", entry.headword);
    Ok(())
}
