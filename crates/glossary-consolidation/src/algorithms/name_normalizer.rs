//! Term name normalization and tokenization for same-concept comparison.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words shorter than or equal to this many characters are ignored as tokens.
pub const MIN_TOKEN_LEN: usize = 2;

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Plural folds: `(pattern, singular)`. Only these nouns are folded.
static PLURAL_FOLDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"records?\b", "record"),
        (r"services?\b", "service"),
        (r"teams?\b", "team"),
        (r"representatives?\b", "representative"),
    ]
    .into_iter()
    .filter_map(|(pattern, singular)| Regex::new(pattern).ok().map(|re| (re, singular)))
    .collect()
});

/// Lowercase, collapse whitespace, fold the known plural nouns, trim.
///
/// A missing name normalizes to the empty string.
pub fn normalize_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    let lower = name.to_lowercase();
    let mut normalized = match WHITESPACE.as_ref() {
        Some(re) => re.replace_all(&lower, " ").into_owned(),
        None => lower,
    };
    for (re, singular) in PLURAL_FOLDS.iter() {
        normalized = re.replace_all(&normalized, *singular).into_owned();
    }
    normalized.trim().to_string()
}

/// Distinct words of a normalized name longer than `MIN_TOKEN_LEN` characters.
pub fn name_tokens(normalized: &str) -> BTreeSet<String> {
    normalized
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
