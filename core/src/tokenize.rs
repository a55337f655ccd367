//! English word recognition inside arbitrary text.
//!
//! A word is an optional single uppercase ASCII letter followed by one or more
//! lowercase ASCII letters, optionally followed by `'s` or `'t`. Everything
//! else (digits, punctuation, all-caps runs, kana, kanji) is left to the
//! caller untouched.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Pattern for a translatable word token.
pub static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]?[a-z]+(?:'[st])?").expect("word pattern is a valid regex"));

/// Replace every word token in `text` with `f(token)`.
///
/// Non-token spans are copied verbatim. Returns `Cow::Borrowed` when the text
/// contains no word at all.
///
/// # Example
/// ```
/// use katakoto_core::tokenize::replace_words;
///
/// let out = replace_words("Hi, it's 3pm!", |w| w.to_uppercase());
/// assert_eq!(out, "HI, IT'S 3PM!");
/// ```
pub fn replace_words<F>(text: &str, mut f: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> String,
{
    WORD_PATTERN.replace_all(text, |caps: &Captures| f(&caps[0]))
}
