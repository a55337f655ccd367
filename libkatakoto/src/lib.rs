//! libkatakoto crate root
//!
//! Rule-based transliteration of English words embedded in arbitrary text into
//! katakana, for feeding a Japanese speech engine.
//!
//! Public API exported here:
//! - `KatakotoTranslator` from `translator`
//! - `WordOverrides` from `words`
//! - `KatakotoConfig` from `config`
//! - built-in rule sets in `rules`
//!
//! ```
//! use libkatakoto::{KatakotoTranslator, Translator};
//!
//! let translator = KatakotoTranslator::default();
//! assert_eq!(translator.translate("Green!"), "グリーン!");
//! ```

pub mod config;
pub mod rules;
pub mod translator;
pub mod words;

pub use katakoto_core::{CachedTranslator, Translator};

pub use config::KatakotoConfig;
pub use translator::KatakotoTranslator;
pub use words::WordOverrides;
