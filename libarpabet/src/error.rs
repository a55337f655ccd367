//! Errors raised while loading phoneme tables and pronunciation dictionaries.
use thiserror::Error;

use crate::symbol::Symbol;

#[derive(Debug, Error)]
pub enum ArpabetError {
    /// A token that is not one of the 39 ARPAbet symbols.
    #[error("unknown ARPAbet symbol: {0:?}")]
    UnknownSymbol(String),

    /// The table declares this combination but leaves it deliberately unmapped.
    #[error("no kana for ARPAbet combination: {}", join_symbols(.0))]
    UnmappedCombination(Vec<Symbol>),

    /// A lexicon entry whose phonemes the table can't cover.
    #[error("can't parse ARPAbet at line {line_number}: {line}")]
    UnparseablePronunciation { line_number: usize, line: String },

    /// A kana table row with more cells than the header has columns.
    #[error("kana table row has {cells} cells but the header has {columns}")]
    RowTooLong { cells: usize, columns: usize },

    /// Any other error, tagged with the source line it came from.
    #[error("line {line_number}: {source}")]
    InvalidLine {
        line_number: usize,
        #[source]
        source: Box<ArpabetError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] katakoto_core::Error),
}

impl ArpabetError {
    /// Attach a source line number.
    pub fn at_line(self, line_number: usize) -> Self {
        ArpabetError::InvalidLine {
            line_number,
            source: Box::new(self),
        }
    }

    /// The error without any line context.
    pub fn root(&self) -> &ArpabetError {
        match self {
            ArpabetError::InvalidLine { source, .. } => source.root(),
            other => other,
        }
    }
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

pub type Result<T> = std::result::Result<T, ArpabetError>;
