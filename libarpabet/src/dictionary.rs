//! Word -> kana dictionary built from a CMU-style pronouncing lexicon.
//!
//! Lexicon format: one entry per line, `WORD PH1 PH2 ...`, fields separated by
//! whitespace. `#` starts a comment. Alternate pronunciations repeat the word
//! with a `(n)` suffix; only the first pronunciation of a word is kept.
//!
//! ```text
//! cat K AE1 T
//! read R EH1 D
//! read(2) R IY1 D
//! d'artagnan D AH0 R T AE1 NG Y AH0 N # foreign french
//! ```
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ArpabetError, Result};
use crate::kana_table::KanaTable;
use crate::matcher::try_match;
use crate::symbol::Symbol;

static VARIANT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d+\)$").expect("variant suffix is a valid regex"));

/// Lowercase word -> katakana spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PronunciationDictionary {
    map: AHashMap<String, String>,
}

impl PronunciationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from lexicon text.
    ///
    /// Fails on the first line whose phonemes are unknown or can't be covered
    /// by `table`; the partially built dictionary is discarded.
    pub fn load<R: BufRead>(reader: R, table: &KanaTable) -> Result<Self> {
        let mut dict = Self::new();
        let mut skipped = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if !dict.parse_line(index + 1, &line, table)? {
                skipped += 1;
            }
        }
        tracing::info!(words = dict.len(), skipped, "loaded pronunciation dictionary");
        Ok(dict)
    }

    /// Build a dictionary from a lexicon file.
    pub fn load_file<P: AsRef<Path>>(path: P, table: &KanaTable) -> Result<Self> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file), table)
    }

    /// Returns `Ok(true)` if the line added a word.
    fn parse_line(&mut self, line_number: usize, raw: &str, table: &KanaTable) -> Result<bool> {
        let line = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            return Ok(false);
        }

        let mut fields = line.split_whitespace();
        let head = match fields.next() {
            Some(head) => head,
            None => return Ok(false),
        };
        let phonemes: Vec<&str> = fields.collect();
        if phonemes.is_empty() {
            return Ok(false);
        }

        let word = VARIANT_SUFFIX.replace(head, "").to_lowercase();
        if !word.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Ok(false);
        }
        if self.map.contains_key(&word) {
            return Ok(false);
        }

        let symbols = Symbol::parse_sequence(phonemes).map_err(|e| e.at_line(line_number))?;
        match try_match(table, &symbols).map_err(|e| e.at_line(line_number))? {
            Some(kana) => {
                self.map.insert(word, kana);
                Ok(true)
            }
            None => Err(ArpabetError::UnparseablePronunciation {
                line_number,
                line: line.to_string(),
            }),
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Save using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> katakoto_core::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load a dictionary produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> katakoto_core::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Save as a sorted JSON object, the same shape as a word override file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> katakoto_core::Result<()> {
        let sorted: std::collections::BTreeMap<&str, &str> = self.iter().collect();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &sorted)?;
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PronunciationDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
