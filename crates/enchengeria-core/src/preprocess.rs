pub trait Preprocessor {
    // Default query preprocessor: no normalization beyond case folding
    fn process(&self, text: &str) -> Option<String> {
        let text = text.trim();

        if text.is_empty() {
            return None;
        }

        Some(text.to_lowercase())
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
