//! libarpabet crate root
//!
//! ARPAbet phoneme sequences -> katakana, and import of CMU-style pronouncing
//! lexicons into a word -> katakana dictionary.
//!
//! Public API exported here:
//! - `Symbol` from `symbol`
//! - `KanaTable`, `load_kana_table`, `load_kana_table_file`,
//!   `reference_kana_table` from `kana_table`
//! - `try_match`, `try_match_tokens` from `matcher`
//! - `PronunciationDictionary` from `dictionary`
//! - `DictionaryTranslator` from `translator`
//! - `ArpabetConfig` from `config`
//! - `ArpabetError` from `error`
//!
//! ```
//! use libarpabet::{reference_kana_table, try_match_tokens};
//!
//! let table = reference_kana_table().unwrap();
//! let kana = try_match_tokens(&table, ["K", "AE1", "T"]).unwrap();
//! assert_eq!(kana.as_deref(), Some("カト"));
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod kana_table;
pub mod matcher;
pub mod symbol;
pub mod translator;

pub use katakoto_core::{CachedTranslator, Translator};

pub use config::ArpabetConfig;
pub use dictionary::PronunciationDictionary;
pub use error::{ArpabetError, Result};
pub use kana_table::{
    load_kana_table, load_kana_table_file, reference_kana_table, KanaTable, REFERENCE_KANA_TABLE,
};
pub use matcher::{try_match, try_match_tokens};
pub use symbol::Symbol;
pub use translator::DictionaryTranslator;
