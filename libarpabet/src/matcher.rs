//! Phoneme sequence -> kana matching.
use katakoto_core::{rewrite, Substitution};

use crate::error::{ArpabetError, Result};
use crate::kana_table::KanaTable;
use crate::symbol::Symbol;

/// Convert a phoneme sequence to kana with greedy longest-match over `table`.
///
/// Returns `Ok(None)` when some offset has no matching rule; no partial
/// output is produced in that case. Matching a rule the table declares but
/// leaves unmapped is an error. An empty sequence converts to `""`.
///
/// # Examples
/// ```
/// use libarpabet::{load_kana_table, try_match, Symbol};
///
/// let table = load_kana_table(",,,AE\nK,,ク,カ\nT,,ト,タ\n".as_bytes()).unwrap();
/// let cat = [Symbol::K, Symbol::AE, Symbol::T];
/// assert_eq!(try_match(&table, &cat).unwrap().as_deref(), Some("カト"));
/// assert_eq!(try_match(&table, &[Symbol::AE]).unwrap(), None);
/// ```
pub fn try_match(table: &KanaTable, symbols: &[Symbol]) -> Result<Option<String>> {
    let mut out = String::new();
    for step in rewrite(table, symbols) {
        match step {
            Substitution::Matched(rule) => match &rule.value {
                Some(kana) => out.push_str(kana),
                None => return Err(ArpabetError::UnmappedCombination(rule.key.clone())),
            },
            Substitution::Unmatched(_) => return Ok(None),
        }
    }
    Ok(Some(out))
}

/// Normalize raw phoneme tokens (`"K"`, `"AE1"`, ...) and match them.
pub fn try_match_tokens<'a, I>(table: &KanaTable, tokens: I) -> Result<Option<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let symbols = Symbol::parse_sequence(tokens)?;
    try_match(table, &symbols)
}
