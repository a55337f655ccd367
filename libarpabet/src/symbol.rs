//! The ARPAbet symbol catalog.
//!
//! 39 phonemes in a fixed declaration order. The order is significant: it is
//! the element order used to break ties between equal-length phoneme keys in a
//! `RuleTable`, so variants must never be reordered.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArpabetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    B,
    CH,
    D,
    DH,
    EH,
    ER,
    EY,
    F,
    G,
    HH,
    IH,
    IY,
    JH,
    K,
    L,
    M,
    N,
    NG,
    OW,
    OY,
    P,
    R,
    S,
    SH,
    T,
    TH,
    UH,
    UW,
    V,
    W,
    Y,
    Z,
    ZH,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; 39] = [
        Symbol::AA,
        Symbol::AE,
        Symbol::AH,
        Symbol::AO,
        Symbol::AW,
        Symbol::AY,
        Symbol::B,
        Symbol::CH,
        Symbol::D,
        Symbol::DH,
        Symbol::EH,
        Symbol::ER,
        Symbol::EY,
        Symbol::F,
        Symbol::G,
        Symbol::HH,
        Symbol::IH,
        Symbol::IY,
        Symbol::JH,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::NG,
        Symbol::OW,
        Symbol::OY,
        Symbol::P,
        Symbol::R,
        Symbol::S,
        Symbol::SH,
        Symbol::T,
        Symbol::TH,
        Symbol::UH,
        Symbol::UW,
        Symbol::V,
        Symbol::W,
        Symbol::Y,
        Symbol::Z,
        Symbol::ZH,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::AA => "AA",
            Symbol::AE => "AE",
            Symbol::AH => "AH",
            Symbol::AO => "AO",
            Symbol::AW => "AW",
            Symbol::AY => "AY",
            Symbol::B => "B",
            Symbol::CH => "CH",
            Symbol::D => "D",
            Symbol::DH => "DH",
            Symbol::EH => "EH",
            Symbol::ER => "ER",
            Symbol::EY => "EY",
            Symbol::F => "F",
            Symbol::G => "G",
            Symbol::HH => "HH",
            Symbol::IH => "IH",
            Symbol::IY => "IY",
            Symbol::JH => "JH",
            Symbol::K => "K",
            Symbol::L => "L",
            Symbol::M => "M",
            Symbol::N => "N",
            Symbol::NG => "NG",
            Symbol::OW => "OW",
            Symbol::OY => "OY",
            Symbol::P => "P",
            Symbol::R => "R",
            Symbol::S => "S",
            Symbol::SH => "SH",
            Symbol::T => "T",
            Symbol::TH => "TH",
            Symbol::UH => "UH",
            Symbol::UW => "UW",
            Symbol::V => "V",
            Symbol::W => "W",
            Symbol::Y => "Y",
            Symbol::Z => "Z",
            Symbol::ZH => "ZH",
        }
    }

    /// Vowels are the symbols that carry a stress digit in CMU-style lexicons.
    pub fn is_vowel(&self) -> bool {
        matches!(
            self,
            Symbol::AA
                | Symbol::AE
                | Symbol::AH
                | Symbol::AO
                | Symbol::AW
                | Symbol::AY
                | Symbol::EH
                | Symbol::ER
                | Symbol::EY
                | Symbol::IH
                | Symbol::IY
                | Symbol::OW
                | Symbol::OY
                | Symbol::UH
                | Symbol::UW
        )
    }

    /// Parse a raw phoneme token such as `"AE1"` or `"ng"`.
    ///
    /// Surrounding whitespace and a trailing run of stress digits are removed;
    /// the rest must name a symbol (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use libarpabet::Symbol;
    ///
    /// assert_eq!(Symbol::normalize("AE1").unwrap(), Symbol::AE);
    /// assert_eq!(Symbol::normalize(" zh ").unwrap(), Symbol::ZH);
    /// assert!(Symbol::normalize("Q").is_err());
    /// ```
    pub fn normalize(token: &str) -> Result<Symbol> {
        let name = token.trim().trim_end_matches(|c: char| c.is_ascii_digit());
        Symbol::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ArpabetError::UnknownSymbol(token.to_string()))
    }

    /// Like `normalize`, but blank input means "no symbol".
    pub fn normalize_optional(token: &str) -> Result<Option<Symbol>> {
        if token.trim().is_empty() {
            Ok(None)
        } else {
            Symbol::normalize(token).map(Some)
        }
    }

    /// Normalize a sequence of tokens, skipping blank ones.
    pub fn parse_sequence<'a, I>(tokens: I) -> Result<Vec<Symbol>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .map(Symbol::normalize)
            .collect()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = ArpabetError;

    fn from_str(s: &str) -> Result<Self> {
        Symbol::normalize(s)
    }
}
