use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SpecificityTable;

/// Consolidation heuristics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Category assigned when no member of a cluster names one.
    pub default_category: String,
    /// Weight of categories missing from `specificity`.
    pub default_specificity: u32,
    /// Category pairs whose records never merge without shared name words.
    pub incompatible_categories: Vec<[String; 2]>,
    /// Words never used as a disambiguation suffix.
    pub stop_words: Vec<String>,
    /// Organization name, also never used as a suffix.
    pub organization: String,
    /// Maximum word overlap for a sentence to count as new information.
    pub sentence_overlap_threshold: f64,
    /// Sentence fragments of this many characters or fewer are discarded.
    pub min_sentence_len: usize,
    /// Category → specificity weight.
    pub specificity: BTreeMap<String, u32>,
}

impl ConsolidationConfig {
    pub fn specificity_table(&self) -> SpecificityTable {
        SpecificityTable::new(self.specificity.clone(), self.default_specificity)
    }

    /// Whether two categories form a configured incompatible pair (either order).
    pub fn categories_incompatible(&self, a: &str, b: &str) -> bool {
        self.incompatible_categories
            .iter()
            .any(|[x, y]| (a == x && b == y) || (a == y && b == x))
    }

    /// Stop words plus the lowercased organization name.
    pub fn suffix_stop_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
        if !self.organization.trim().is_empty() {
            words.push(self.organization.trim().to_lowercase());
        }
        words
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            default_category: defaults::DEFAULT_CATEGORY.to_string(),
            default_specificity: defaults::DEFAULT_SPECIFICITY_WEIGHT,
            incompatible_categories: defaults::DEFAULT_INCOMPATIBLE_CATEGORIES
                .iter()
                .map(|[a, b]| [a.to_string(), b.to_string()])
                .collect(),
            stop_words: defaults::DEFAULT_STOP_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            organization: defaults::DEFAULT_ORGANIZATION.to_string(),
            sentence_overlap_threshold: defaults::DEFAULT_SENTENCE_OVERLAP_THRESHOLD,
            min_sentence_len: defaults::DEFAULT_MIN_SENTENCE_LEN,
            specificity: defaults::default_specificity_weights(),
        }
    }
}
