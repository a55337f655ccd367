//! Dictionary-backed translator.
use std::fmt;
use std::sync::Arc;

use katakoto_core::{tokenize, Translator};

use crate::dictionary::PronunciationDictionary;

/// Replaces English words with their dictionary pronunciation.
///
/// Tokens are recognized exactly like the grapheme translator does. Words the
/// dictionary doesn't know go to the fallback translator when one is set, and
/// are left unchanged otherwise.
pub struct DictionaryTranslator {
    dictionary: Arc<PronunciationDictionary>,
    fallback: Option<Box<dyn Translator + Send + Sync>>,
}

impl DictionaryTranslator {
    pub fn new(dictionary: Arc<PronunciationDictionary>) -> Self {
        Self {
            dictionary,
            fallback: None,
        }
    }

    pub fn with_fallback<T>(mut self, fallback: T) -> Self
    where
        T: Translator + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn dictionary(&self) -> &PronunciationDictionary {
        &self.dictionary
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    fn translate_word(&self, word: &str) -> String {
        if let Some(kana) = self.dictionary.get(&word.to_lowercase()) {
            return kana.to_string();
        }
        match &self.fallback {
            Some(fallback) => fallback.translate(word),
            None => word.to_string(),
        }
    }
}

impl Translator for DictionaryTranslator {
    fn translate(&self, text: &str) -> String {
        tokenize::replace_words(text, |word| self.translate_word(word)).into_owned()
    }
}

impl fmt::Debug for DictionaryTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryTranslator")
            .field("words", &self.dictionary.len())
            .field("fallback", &self.has_fallback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libkatakoto::KatakotoTranslator;

    fn dictionary() -> Arc<PronunciationDictionary> {
        Arc::new([("cat", "キャット"), ("cat's", "キャッツ")].into_iter().collect())
    }

    #[test]
    fn known_words_use_the_dictionary() {
        let t = DictionaryTranslator::new(dictionary());
        assert_eq!(t.translate("Cat!"), "キャット!");
        assert_eq!(t.translate("the cat's toy"), "the キャッツ toy");
    }

    #[test]
    fn fallback_handles_misses() {
        let t = DictionaryTranslator::new(dictionary()).with_fallback(KatakotoTranslator::default());
        assert!(t.has_fallback());
        assert_eq!(t.translate("Green cat"), "グリーン キャット");
    }

    #[test]
    fn debug_is_compact() {
        let t = DictionaryTranslator::new(dictionary());
        assert_eq!(
            format!("{t:?}"),
            "DictionaryTranslator { words: 2, fallback: false }"
        );
    }
}
