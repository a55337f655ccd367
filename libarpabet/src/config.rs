use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::PronunciationDictionary;
use crate::error::Result;
use crate::kana_table::{load_kana_table_file, reference_kana_table, KanaTable};

/// Phoneme-dictionary configuration that extends the base `Config` from core.
///
/// # Example
///
/// ```rust
/// use libarpabet::ArpabetConfig;
///
/// let config = ArpabetConfig::from_toml_str(
///     "lexicon_file = \"cmudict-0.7b\"\nfallback_to_rules = false",
/// )
/// .unwrap();
/// assert_eq!(config.lexicon_file, "cmudict-0.7b");
/// assert_eq!(config.kana_table_file, "arpabet-kana.csv");
/// assert!(!config.fallback_to_rules);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArpabetConfig {
    #[serde(flatten)]
    pub base: katakoto_core::Config,

    /// Kana table file name searched in the data directories
    pub kana_table_file: String,

    /// CMU-style lexicon file name searched in the data directories
    pub lexicon_file: String,

    /// Send words missing from the dictionary through the spelling rules
    pub fallback_to_rules: bool,
}

impl Default for ArpabetConfig {
    fn default() -> Self {
        Self {
            base: katakoto_core::Config::default(),
            kana_table_file: "arpabet-kana.csv".to_string(),
            lexicon_file: "cmudict.dict".to_string(),
            fallback_to_rules: true,
        }
    }
}

impl ArpabetConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> katakoto_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn kana_table_path(&self) -> Option<PathBuf> {
        self.base.find_data_file(&self.kana_table_file)
    }

    pub fn lexicon_path(&self) -> Option<PathBuf> {
        self.base.find_data_file(&self.lexicon_file)
    }

    /// The first kana table found in the data directories, or the bundled
    /// reference table when there is none.
    pub fn load_kana_table(&self) -> Result<KanaTable> {
        match self.kana_table_path() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading kana table");
                load_kana_table_file(path)
            }
            None => reference_kana_table(),
        }
    }

    /// The first lexicon found in the data directories. A missing lexicon
    /// gives an empty dictionary.
    pub fn load_dictionary(&self, table: &KanaTable) -> Result<PronunciationDictionary> {
        match self.lexicon_path() {
            Some(path) => PronunciationDictionary::load_file(path, table),
            None => {
                tracing::warn!(file = %self.lexicon_file, "no lexicon found in data directories");
                Ok(PronunciationDictionary::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("libarpabet_config_{}_{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn flattened_base_fields() {
        let config = ArpabetConfig::from_toml_str("max_cache_size = 0\ndata_dirs = [\"x\"]").unwrap();
        assert_eq!(config.base.max_cache_size, 0);
        assert_eq!(config.base.data_dirs, vec![PathBuf::from("x")]);
        assert!(config.fallback_to_rules);
    }

    #[test]
    fn loads_from_data_dirs() {
        let dir = temp_dir("load");
        std::fs::write(dir.join("arpabet-kana.csv"), ",,AE\nK,,カ\n").unwrap();
        std::fs::write(dir.join("cmudict.dict"), "ka K AE1\n").unwrap();
        let mut config = ArpabetConfig::default();
        config.base.data_dirs = vec![dir.clone()];

        let table = config.load_kana_table().unwrap();
        assert_eq!(table.len(), 1);
        let dict = config.load_dictionary(&table).unwrap();
        assert_eq!(dict.get("ka"), Some("カ"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_files_use_defaults() {
        let dir = temp_dir("missing");
        let mut config = ArpabetConfig::default();
        config.base.data_dirs = vec![dir.clone()];

        let table = config.load_kana_table().unwrap();
        assert_eq!(table.len(), reference_kana_table().unwrap().len());
        assert!(config.load_dictionary(&table).unwrap().is_empty());
        let _ = std::fs::remove_dir_all(dir);
    }
}
