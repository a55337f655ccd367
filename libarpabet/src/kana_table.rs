/*!
ARPAbet -> katakana conversion table loader.

Table layout (CSV, UTF-8)
-------------------------
- Row 1 is the header. The first two cells are ignored; every following cell
  names a vowel symbol, or is blank for a "no vowel" column.
- Every other row starts with up to two consonant cells (blank = no consonant
  in that slot) followed by one kana cell per header column.

Each row × column produces the key `consonants ++ [vowel]` with the blank parts
left out. Keys that end up empty are dropped. A blank kana cell marks a
combination the table knows about but deliberately leaves unmapped; matching it
later is an error, not a miss.

```text
,,,AA,AE
K,,ク,カ,カ
T,S,ツ,ツァ,ツァ
```
*/

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use katakoto_core::RuleTable;

use crate::error::{ArpabetError, Result};
use crate::symbol::Symbol;

/// Number of leading consonant columns in every row.
pub const CONSONANT_COLUMNS: usize = 2;

/// Phoneme-sequence -> kana table. `None` values are declared but unmapped.
pub type KanaTable = RuleTable<Symbol, Option<String>>;

/// Load a kana table from CSV text.
///
/// An empty source yields an empty table.
pub fn load_kana_table<R: io::Read>(reader: R) -> Result<KanaTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(header) => header?,
        None => return Ok(KanaTable::default()),
    };
    let vowels: Vec<Option<Symbol>> = header
        .iter()
        .skip(CONSONANT_COLUMNS)
        .map(Symbol::normalize_optional)
        .collect::<Result<_>>()
        .map_err(|e| e.at_line(line_of(&header)))?;

    let mut pairs: Vec<(Vec<Symbol>, Option<String>)> = Vec::new();
    for record in records {
        let record = record?;
        let line_number = line_of(&record);
        parse_row(&record, &vowels, &mut pairs).map_err(|e| e.at_line(line_number))?;
    }

    let table = KanaTable::build(pairs);
    tracing::debug!(
        rules = table.len(),
        unmapped = table.iter().filter(|r| r.value.is_none()).count(),
        "loaded ARPAbet kana table"
    );
    Ok(table)
}

/// CSV source of the table shipped with this crate.
pub const REFERENCE_KANA_TABLE: &str = include_str!("../data/arpabet-kana.csv");

/// Parse the bundled reference table.
pub fn reference_kana_table() -> Result<KanaTable> {
    load_kana_table(REFERENCE_KANA_TABLE.as_bytes())
}

/// Load a kana table from a CSV file.
pub fn load_kana_table_file<P: AsRef<Path>>(path: P) -> Result<KanaTable> {
    let file = File::open(path)?;
    load_kana_table(BufReader::new(file))
}

fn parse_row(
    record: &csv::StringRecord,
    vowels: &[Option<Symbol>],
    pairs: &mut Vec<(Vec<Symbol>, Option<String>)>,
) -> Result<()> {
    let mut consonants = Vec::with_capacity(CONSONANT_COLUMNS);
    for i in 0..CONSONANT_COLUMNS {
        if let Some(symbol) = Symbol::normalize_optional(record.get(i).unwrap_or(""))? {
            consonants.push(symbol);
        }
    }

    let cells = record.len().saturating_sub(CONSONANT_COLUMNS);
    if cells > vowels.len() {
        return Err(ArpabetError::RowTooLong {
            cells,
            columns: vowels.len(),
        });
    }

    for (vowel, cell) in vowels.iter().zip(record.iter().skip(CONSONANT_COLUMNS)) {
        let mut key = consonants.clone();
        key.extend(*vowel);
        if key.is_empty() {
            continue;
        }
        let kana = cell.trim();
        let value = if kana.is_empty() {
            None
        } else {
            Some(kana.to_string())
        };
        pairs.push((key, value));
    }
    Ok(())
}

fn line_of(record: &csv::StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}
