//! Whole-word override dictionary.
//!
//! Maps a lowercase English word to the exact katakana to speak. When a word is
//! present here the rule passes never run for it. Sources are flat JSON objects
//! (`{"green": "グリーン"}`), usually `words.json` in each data directory.
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use katakoto_core::{utils, Config, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordOverrides {
    map: HashMap<String, String>,
}

impl WordOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an override. The key is normalized to lowercase.
    pub fn insert<K: AsRef<str>, V: AsRef<str>>(&mut self, word: K, spelling: V) {
        let key = utils::normalize_key(word.as_ref());
        if key.is_empty() {
            return;
        }
        self.map.insert(key, utils::normalize(spelling.as_ref()));
    }

    /// Lookup by word; the word is lowercased before the lookup.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Merge `other` into `self`; entries of `other` win.
    pub fn extend(&mut self, other: WordOverrides) {
        self.map.extend(other.map);
    }

    /// Parse a JSON object of word -> spelling.
    ///
    /// Keys that collide once lowercased are applied in byte order of the raw
    /// key and the last one wins, so `"green"` beats `"Green"` and `"GREEN"`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    /// Load one JSON file. A missing file yields an empty map.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        let words = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), entries = words.len(), "loaded word overrides");
        Ok(words)
    }

    /// Merge `file_name` from every data directory in `config`, later
    /// directories overriding earlier ones. Unreadable files are logged and
    /// skipped.
    pub fn discover(config: &Config, file_name: &str) -> Self {
        let mut words = Self::new();
        for path in config.find_data_files(file_name) {
            match Self::load_file(&path) {
                Ok(found) => words.extend(found),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping word override file")
                }
            }
        }
        words
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for WordOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut words = Self::new();
        for (k, v) in iter {
            words.insert(k, v);
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("libkatakoto_words_{}_{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn keys_are_case_insensitive() {
        let words: WordOverrides = [(" Hello ", "ハロー")].into_iter().collect();
        assert_eq!(words.get("hello"), Some("ハロー"));
        assert_eq!(words.get("HELLO"), Some("ハロー"));
        assert_eq!(words.get("help"), None);
    }

    #[test]
    fn parses_json_and_composes_kana() {
        let words = WordOverrides::from_json_str(r#"{ "gate": "ゲート" }"#).unwrap();
        assert_eq!(words.get("gate"), Some("ゲート"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(WordOverrides::from_json_str("[1, 2]").is_err());
        assert!(WordOverrides::from_json_str("{").is_err());
    }

    #[test]
    fn case_colliding_keys_have_one_winner() {
        let json = r#"{"Green": "A", "green": "B", "GREEN": "C"}"#;
        for _ in 0..200 {
            let words = WordOverrides::from_json_str(json).unwrap();
            assert_eq!(words.len(), 1);
            assert_eq!(words.get("green"), Some("B"));
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let words = WordOverrides::load_file(temp_dir("missing").join("nope.json")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn later_directories_win() {
        let a = temp_dir("a");
        let b = temp_dir("b");
        std::fs::write(a.join("words.json"), r#"{"one": "ワン", "two": "ツー"}"#).unwrap();
        std::fs::write(b.join("words.json"), r#"{"two": "トゥー"}"#).unwrap();
        let config = Config {
            data_dirs: vec![a.clone(), b.clone()],
            max_cache_size: 0,
        };
        let words = WordOverrides::discover(&config, "words.json");
        assert_eq!(words.len(), 2);
        assert_eq!(words.get("one"), Some("ワン"));
        assert_eq!(words.get("two"), Some("トゥー"));
        let _ = std::fs::remove_dir_all(a);
        let _ = std::fs::remove_dir_all(b);
    }

    #[test]
    fn discover_skips_broken_files() {
        let dir = temp_dir("broken");
        std::fs::write(dir.join("words.json"), "not json").unwrap();
        let config = Config {
            data_dirs: vec![dir.clone()],
            max_cache_size: 0,
        };
        assert!(WordOverrides::discover(&config, "words.json").is_empty());
        let _ = std::fs::remove_dir_all(dir);
    }
}
