//! Greedy longest-match rewriting over a `RuleTable`.
//!
//! Scanning starts at offset 0. At every offset the first rule (in canonical
//! table order) whose key is a prefix of the remaining input is taken and the
//! offset advances by the key length. When nothing matches, the single unit at
//! the offset is passed through unchanged and the offset advances by one. Every
//! step consumes at least one unit, so rewriting is total and terminates for
//! any input and any table.
use crate::rule_table::{Rule, RuleTable};

/// One step of a rewrite: either a table rule or an unmatched unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution<'a, U, V> {
    Matched(&'a Rule<U, V>),
    Unmatched(U),
}

impl<'a, U, V> Substitution<'a, U, V> {
    /// The consumed input units.
    pub fn key(&self) -> &[U] {
        match self {
            Substitution::Matched(rule) => &rule.key,
            Substitution::Unmatched(unit) => std::slice::from_ref(unit),
        }
    }

    /// The rule value, `None` for a pass-through unit.
    pub fn value(&self) -> Option<&'a V> {
        match self {
            Substitution::Matched(rule) => Some(&rule.value),
            Substitution::Unmatched(_) => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Substitution::Matched(_))
    }
}

/// Rewrite `input` with `table`, returning every step in order.
pub fn rewrite<'a, U, V>(table: &'a RuleTable<U, V>, input: &[U]) -> Vec<Substitution<'a, U, V>>
where
    U: Ord + Clone,
{
    let mut out = Vec::with_capacity(input.len());
    let mut offset = 0;
    while offset < input.len() {
        match table.match_at(input, offset) {
            Some(rule) => {
                offset += rule.len();
                out.push(Substitution::Matched(rule));
            }
            None => {
                out.push(Substitution::Unmatched(input[offset].clone()));
                offset += 1;
            }
        }
    }
    out
}

/// Rewrite a string with a character table and concatenate the output.
///
/// Unmatched characters are copied verbatim.
///
/// # Example
/// ```
/// use katakoto_core::{rewrite_str, RuleTable};
///
/// let table = RuleTable::from_strs([("sh", "s"), ("ee", "i-")]);
/// assert_eq!(rewrite_str(&table, "sheep"), "si-p");
/// ```
pub fn rewrite_str(table: &RuleTable<char, String>, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for step in rewrite(table, &chars) {
        match step {
            Substitution::Matched(rule) => out.push_str(&rule.value),
            Substitution::Unmatched(ch) => out.push(ch),
        }
    }
    out
}
