use std::path::Path;

use serde::{Deserialize, Serialize};

/// Grapheme-translator configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `katakoto_core::Config` (flattened via serde)
/// - The file name of the word override dictionary looked up in each data dir
///
/// # Example
///
/// ```rust
/// use libkatakoto::KatakotoConfig;
///
/// let config = KatakotoConfig::from_toml_str("word_file = \"names.json\"").unwrap();
/// assert_eq!(config.word_file, "names.json");
/// assert_eq!(config.base.max_cache_size, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KatakotoConfig {
    /// Base configuration fields (data directories, cache size)
    #[serde(flatten)]
    pub base: katakoto_core::Config,

    /// Word override file name searched in every data directory
    pub word_file: String,
}

impl Default for KatakotoConfig {
    fn default() -> Self {
        Self {
            base: katakoto_core::Config::default(),
            word_file: "words.json".to_string(),
        }
    }
}

impl KatakotoConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> katakoto_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
