use std::path::Path;

use enchengeria_core::dictionary::LoadError;

use crate::dictionary::EkegusiiDictionary;

const EMBEDDED: &str = include_str!("../data/dictionary.json");

pub struct EkegusiiLoader;

impl EkegusiiLoader {
    /// Load embedded dictionary data
    pub fn load_embedded() -> Result<EkegusiiDictionary, LoadError> {
        tracing::info!("Loading embedded Ekegusii dictionary...");
        let dict = EkegusiiDictionary::from_json(EMBEDDED)?;
        tracing::info!("Loaded {} dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<EkegusiiDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = EkegusiiDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones by headword)
    pub fn merge(base: EkegusiiDictionary, additional: EkegusiiDictionary) -> EkegusiiDictionary {
        base.merge(additional)
    }

    /// Embedded dictionary plus every readable file in `additional_paths`.
    /// Files that fail to load are logged and skipped.
    pub fn load_with_additional(additional_paths: &[String]) -> EkegusiiDictionary {
        let mut dict = Self::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded dictionary: {}", e);
            tracing::warn!("Starting with empty dictionary");
            EkegusiiDictionary::new()
        });

        for path in additional_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = Self::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enchengeria_core::dictionary::Dictionary;
    use std::io::Write;

    #[test]
    fn test_embedded_dataset_loads() {
        let dict = EkegusiiLoader::load_embedded().unwrap();
        assert!(dict.entry_count() > 10);
        assert!(dict.lookup_exact("amache").is_some());
        assert!(dict.entries().iter().all(|e| !e.headword.is_empty()));
    }

    #[test]
    fn test_embedded_headwords_are_unique() {
        let dict = EkegusiiLoader::load_embedded().unwrap();
        let mut headwords: Vec<&str> = dict.entries().iter().map(|e| e.headword.as_str()).collect();
        let total = headwords.len();
        headwords.sort_unstable();
        headwords.dedup();
        assert_eq!(headwords.len(), total);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = EkegusiiLoader::load_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_additional_files_are_merged_and_bad_ones_skipped() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        write!(
            good,
            r#"[{{"ekegusii": "ekitabu", "pos": "noun", "sw": "kitabu", "en": "book"}},
               {{"ekegusii": "amache", "pos": "noun", "sw": "maji", "en": "drinking water"}}]"#
        )
        .unwrap();

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();

        let embedded = EkegusiiLoader::load_embedded().unwrap().entry_count();
        let dict = EkegusiiLoader::load_with_additional(&[
            bad.path().display().to_string(),
            good.path().display().to_string(),
            "/missing.json".to_string(),
        ]);

        assert_eq!(dict.entry_count(), embedded + 1);
        assert_eq!(dict.lookup_exact("ekitabu").unwrap().english, "book");
        assert_eq!(dict.lookup_exact("amache").unwrap().english, "drinking water");
    }
}
