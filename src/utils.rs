//! Text helpers shared by search and sorting.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Strip diacritics by decomposing and dropping combining marks.
///
/// `"Nguyễn"` becomes `"Nguyen"`.
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Fold text to its base form: no diacritics, lower case.
#[must_use]
pub fn fold_base(text: &str) -> String {
    strip_diacritics(text).to_lowercase()
}

/// Compare two strings at base strength, ignoring case and accents.
///
/// Strings that fold to the same base compare equal. This approximates
/// base-strength collation by comparing the folded text code point by code
/// point, so punctuation and non-Latin scripts may order differently than a
/// locale collator would.
#[must_use]
pub fn compare_base(a: &str, b: &str) -> Ordering {
    fold_base(a).cmp(&fold_base(b))
}
