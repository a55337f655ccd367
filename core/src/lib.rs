//! katakoto-core
//!
//! Rule tables, the greedy rewriter and translator plumbing shared by the
//! language front ends (libkatakoto for spelling rules, libarpabet for
//! phoneme dictionaries).
//!
//! Public API:
//! - `RuleTable` / `Rule` - canonically ordered rewrite rules
//! - `rewrite` / `rewrite_str` - greedy longest-match rewriting
//! - `tokenize` - English word recognition inside arbitrary text
//! - `Translator` / `CachedTranslator` - translation trait and LRU memoization
//! - `Config` - shared configuration (data directories, cache size)
//! - `Error` - I/O and serialization errors
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod rule_table;
pub use rule_table::{Rule, RuleTable};

pub mod rewriter;
pub use rewriter::{rewrite, rewrite_str, Substitution};

pub mod tokenize;

pub mod translator;
pub use translator::{CachedTranslator, Translator};

/// Generic configuration shared by the front-end crates.
///
/// Front-end specific options (word file names, table paths) belong in
/// `KatakotoConfig` or `ArpabetConfig`, which flatten this struct.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directories searched in order for data files. For merged sources
    /// (word overrides) later directories win.
    pub data_dirs: Vec<PathBuf>,

    /// Capacity of the memoizing translator; 0 disables it.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dirs: Self::default_data_dirs(),
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// `data/` next to the working directory, then `~/.katakoto` if a home
    /// directory is known.
    pub fn default_data_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from("data")];
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            dirs.push(PathBuf::from(home).join(".katakoto"));
        }
        dirs
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Every existing `<dir>/<name>` in search order.
    pub fn find_data_files(&self, name: &str) -> Vec<PathBuf> {
        self.data_dirs
            .iter()
            .map(|dir| dir.join(name))
            .filter(|path| path.is_file())
            .collect()
    }

    /// First existing `<dir>/<name>` in search order.
    pub fn find_data_file(&self, name: &str) -> Option<PathBuf> {
        self.find_data_files(name).into_iter().next()
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Normalize a dictionary key: NFC, trimmed, lowercase.
    pub fn normalize_key(s: &str) -> String {
        normalize(s).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            data_dirs: vec![PathBuf::from("a"), PathBuf::from("b")],
            max_cache_size: 7,
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn config_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("katakoto_core_config_{}.toml", std::process::id()));
        let cfg = Config {
            data_dirs: vec![PathBuf::from("data"), PathBuf::from("/opt/katakoto")],
            max_cache_size: 42,
        };
        cfg.save_toml(&path).unwrap();
        assert_eq!(Config::load_toml(&path).unwrap(), cfg);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_toml_str("max_cache_size = 3").unwrap();
        assert_eq!(cfg.max_cache_size, 3);
        assert_eq!(cfg.data_dirs, Config::default_data_dirs());
    }

    #[test]
    fn find_data_files_in_order() {
        let root = std::env::temp_dir().join(format!("katakoto_core_find_{}", std::process::id()));
        let first = root.join("first");
        let second = root.join("second");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::write(second.join("x.json"), "{}").unwrap();
        std::fs::write(first.join("x.json"), "{}").unwrap();

        let cfg = Config {
            data_dirs: vec![first.clone(), root.join("missing"), second.clone()],
            max_cache_size: 0,
        };
        assert_eq!(
            cfg.find_data_files("x.json"),
            vec![first.join("x.json"), second.join("x.json")]
        );
        assert_eq!(cfg.find_data_file("x.json"), Some(first.join("x.json")));
        assert_eq!(cfg.find_data_file("y.json"), None);
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn normalize_composes_and_trims() {
        // カ + combining voiced mark -> ガ
        assert_eq!(utils::normalize(" \u{30AB}\u{3099} "), "\u{30AC}");
        assert_eq!(utils::normalize_key(" Green "), "green");
    }
}
