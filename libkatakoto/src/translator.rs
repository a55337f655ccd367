//! Grapheme translator: English words inside text -> katakana.
//!
//! Each recognized word is first looked up (lowercased) in the override
//! dictionary. Otherwise it goes through two greedy passes: spelling ->
//! phonetic romanization (speaking rules), then romanization -> katakana (kana
//! rules). Text outside word tokens is never touched.
use std::sync::Arc;

use katakoto_core::{rewrite_str, tokenize, RuleTable, Translator};

use crate::config::KatakotoConfig;
use crate::rules;
use crate::words::WordOverrides;

#[derive(Debug, Clone)]
pub struct KatakotoTranslator {
    words: WordOverrides,
    speaking: Arc<RuleTable<char, String>>,
    kana: Arc<RuleTable<char, String>>,
}

impl Default for KatakotoTranslator {
    fn default() -> Self {
        Self::new(WordOverrides::new())
    }
}

impl KatakotoTranslator {
    /// Translator over the built-in rule tables.
    pub fn new(words: WordOverrides) -> Self {
        Self::with_tables(words, rules::speaking_table(), rules::kana_table())
    }

    /// Translator over caller-supplied tables.
    pub fn with_tables(
        words: WordOverrides,
        speaking: Arc<RuleTable<char, String>>,
        kana: Arc<RuleTable<char, String>>,
    ) -> Self {
        Self {
            words,
            speaking,
            kana,
        }
    }

    /// Built-in tables plus every `word_file` found in the data directories.
    pub fn from_config(config: &KatakotoConfig) -> Self {
        Self::new(WordOverrides::discover(&config.base, &config.word_file))
    }

    pub fn words(&self) -> &WordOverrides {
        &self.words
    }

    /// Translate a single word token.
    pub fn translate_word(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if let Some(spelling) = self.words.get(&word) {
            return spelling.to_string();
        }
        let phonetic = rewrite_str(&self.speaking, &word);
        rewrite_str(&self.kana, &phonetic)
    }
}

impl Translator for KatakotoTranslator {
    fn translate(&self, text: &str) -> String {
        tokenize::replace_words(text, |word| self.translate_word(word)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_word_ignores_case() {
        let t = KatakotoTranslator::default();
        assert_eq!(t.translate_word("GREEN"), "グリーン");
        assert_eq!(t.translate_word("green"), "グリーン");
    }

    #[test]
    fn override_wins_over_rules() {
        let words: WordOverrides = [("star", "ホシ")].into_iter().collect();
        let t = KatakotoTranslator::new(words);
        assert_eq!(t.translate("Star"), "ホシ");
        assert_eq!(t.words().len(), 1);
    }

    #[test]
    fn custom_tables() {
        let speaking = Arc::new(RuleTable::from_strs([("ph", "f")]));
        let kana = Arc::new(RuleTable::from_strs([("f", "F"), ("o", "O")]));
        let t = KatakotoTranslator::with_tables(WordOverrides::new(), speaking, kana);
        assert_eq!(t.translate("pho!"), "FO!");
    }
}
