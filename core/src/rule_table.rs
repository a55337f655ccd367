//! Ordered rewrite rule tables.
//!
//! A `RuleTable` is an immutable list of `(key, value)` rules kept in one
//! canonical scan order:
//!
//! 1. longer keys first;
//! 2. keys of equal length in ascending element-wise order (`Ord` of the unit,
//!    i.e. character code for `char` keys or declaration order for enum keys).
//!
//! The order is computed from the rule set alone, so two tables built from the
//! same rules always rewrite identically no matter how the rules were authored.
//! Scanning the table front to back and stopping at the first rule whose key is
//! a prefix of the input therefore yields the longest match, with the
//! lexicographic tie-break above.
use std::cmp::Ordering;

/// A single rewrite rule: a key sequence and its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<U, V> {
    pub key: Vec<U>,
    pub value: V,
}

impl<U, V> Rule<U, V> {
    pub fn new(key: Vec<U>, value: V) -> Self {
        Self { key, value }
    }

    /// Number of units the key consumes.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// True if the key is empty. Tables never hold such rules.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Immutable, canonically ordered rule list.
///
/// # Example
/// ```
/// use katakoto_core::RuleTable;
///
/// let table = RuleTable::from_strs([("a", "1"), ("ab", "2"), ("b", "3")]);
/// let keys: Vec<String> = table.iter().map(|r| r.key.iter().collect()).collect();
/// assert_eq!(keys, vec!["ab", "a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable<U, V> {
    rules: Vec<Rule<U, V>>,
}

impl<U, V> Default for RuleTable<U, V> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

/// Canonical order: length descending, then element-wise ascending.
fn canonical_order<U: Ord>(a: &[U], b: &[U]) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

impl<U: Ord, V> RuleTable<U, V> {
    /// Build a table from unordered `(key, value)` pairs.
    ///
    /// Empty keys are dropped. If the same key is declared more than once, the
    /// first declaration wins and the rest are discarded.
    pub fn build<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoIterator<Item = U>,
    {
        let mut rules: Vec<Rule<U, V>> = pairs
            .into_iter()
            .map(|(key, value)| Rule::new(key.into_iter().collect(), value))
            .filter(|rule| !rule.is_empty())
            .collect();

        // Stable sort keeps duplicate keys in declaration order.
        rules.sort_by(|a, b| canonical_order(&a.key, &b.key));

        let before = rules.len();
        rules.dedup_by(|later, earlier| later.key == earlier.key);
        if rules.len() != before {
            tracing::warn!(
                dropped = before - rules.len(),
                "duplicate rule keys ignored"
            );
        }

        Self { rules }
    }

    /// First rule (in canonical order) whose key is a prefix of
    /// `input[offset..]`.
    pub fn match_at(&self, input: &[U], offset: usize) -> Option<&Rule<U, V>> {
        let rest = input.get(offset..)?;
        self.rules.iter().find(|rule| rest.starts_with(&rule.key))
    }
}

impl<U, V> RuleTable<U, V> {
    /// Iterate rules in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule<U, V>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Length of the longest key, 0 for an empty table.
    pub fn max_key_len(&self) -> usize {
        self.rules.first().map(Rule::len).unwrap_or(0)
    }
}

impl RuleTable<char, String> {
    /// Convenience constructor for character rules authored as string pairs.
    pub fn from_strs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::build(
            pairs
                .into_iter()
                .map(|(key, value)| (key.chars().collect::<Vec<_>>(), value.to_string())),
        )
    }
}

impl<'a, U, V> IntoIterator for &'a RuleTable<U, V> {
    type Item = &'a Rule<U, V>;
    type IntoIter = std::slice::Iter<'a, Rule<U, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
