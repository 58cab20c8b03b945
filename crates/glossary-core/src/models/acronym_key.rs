use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Trailing disambiguation suffix such as " (Architecture)".
static TRAILING_SUFFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]+\)\s*$").ok());

/// Matches any parenthetical note, wherever it appears.
static PARENTHETICAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]+\)\s*").ok());

/// Grouping key: an acronym with its trailing disambiguation suffix removed.
///
/// Case-sensitive. `"AE (Sales)"`, `" AE "` and `"AE"` all map to `AE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcronymKey(String);

impl AcronymKey {
    pub fn from_acronym(acronym: &str) -> Self {
        let trimmed = acronym.trim();
        let stripped = match TRAILING_SUFFIX.as_ref() {
            Some(re) => re.replace(trimmed, ""),
            None => trimmed.into(),
        };
        Self(stripped.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The acronym a disambiguated cluster is published under.
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!("{} ({})", self.0, suffix)
    }
}

impl fmt::Display for AcronymKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AcronymKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Replace every parenthetical note in `text` with a single space and trim.
pub fn strip_parentheticals(text: &str) -> String {
    match PARENTHETICAL.as_ref() {
        Some(re) => re.replace_all(text, " ").trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_suffix_and_whitespace() {
        assert_eq!(AcronymKey::from_acronym("AE (Sales)").as_str(), "AE");
        assert_eq!(AcronymKey::from_acronym("  ADR  ").as_str(), "ADR");
        assert_eq!(AcronymKey::from_acronym("ADR(Architecture) ").as_str(), "ADR");
    }

    #[test]
    fn keeps_inner_parentheticals() {
        assert_eq!(
            AcronymKey::from_acronym("A (B) C").as_str(),
            "A (B) C",
            "only a trailing suffix is removed"
        );
    }

    #[test]
    fn empty_parentheses_are_not_a_suffix() {
        assert_eq!(AcronymKey::from_acronym("X ()").as_str(), "X ()");
    }

    #[test]
    fn is_case_sensitive() {
        assert_ne!(AcronymKey::from_acronym("Ae"), AcronymKey::from_acronym("AE"));
    }

    #[test]
    fn with_suffix_formats_parenthetical() {
        let key = AcronymKey::from_acronym("AE");
        assert_eq!(key.with_suffix("Executive"), "AE (Executive)");
    }

    #[test]
    fn strip_parentheticals_removes_all_notes() {
        assert_eq!(
            strip_parentheticals("Account Executive (Sales) Role"),
            "Account Executive Role"
        );
    }
}
