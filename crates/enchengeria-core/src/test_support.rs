use crate::dictionary::{Dictionary, DictionaryMetadata, Entry};

pub fn entry(headword: &str, pos: &str, sw: &str, en: &str, ex: &str) -> Entry {
    Entry {
        headword: headword.to_string(),
        ipa: String::new(),
        part_of_speech: pos.to_string(),
        kiswahili: sw.to_string(),
        english: en.to_string(),
        example: ex.to_string(),
        audio: format!("{headword}.mp3"),
    }
}

pub fn headwords<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a str> {
    entries.into_iter().map(|e| e.headword.as_str()).collect()
}

pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("omonto", "noun", "mtu", "person", "Omonto oyo n'omuya."),
        entry("amache", "noun", "maji", "water", "Amache n'amaya."),
        entry("mogaka", "noun", "mzee", "old man", ""),
        entry("ogokora", "verb", "kufanya", "to do, to work", ""),
        entry("mwomba", "noun", "maskini", "poor person", ""),
        entry("buya", "adjective", "nzuri", "good", "Omonto omuya."),
    ]
}

pub struct TestDictionary {
    entries: Vec<Entry>,
}

impl TestDictionary {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl Dictionary for TestDictionary {
    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "test".to_string(),
            version: "0".to_string(),
            language: "guz".to_string(),
            entry_count: self.entries.len(),
        }
    }
}
