//! Locale-style string ordering for the published glossary.
//!
//! Approximates root-locale collation: a primary pass that ignores case and
//! ranks whitespace/punctuation before digits before letters, a tertiary pass
//! that puts lowercase before uppercase, and code point order as the final tie-break.

use std::cmp::Ordering;

/// Primary collation class of a character.
fn class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn primary_key(c: char) -> (u8, char) {
    let folded = c.to_lowercase().next().unwrap_or(c);
    (class(c), folded)
}

/// Lowercase sorts first on otherwise equal strings.
fn tertiary_key(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compare two strings the way a reader scanning a glossary expects.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(tertiary_key).cmp(b.chars().map(tertiary_key)))
        .then_with(|| a.cmp(b))
}
