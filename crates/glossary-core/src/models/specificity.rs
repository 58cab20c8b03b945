use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Category name → priority weight used to arbitrate merged categories.
///
/// A more specific category outranks a generic one ("Amazon" beats "GitHub Repos").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificityTable {
    weights: BTreeMap<String, u32>,
    default_weight: u32,
}

impl SpecificityTable {
    pub fn new(weights: BTreeMap<String, u32>, default_weight: u32) -> Self {
        Self {
            weights,
            default_weight,
        }
    }

    /// Weight of `category`, or the default weight for unlisted categories.
    pub fn weight(&self, category: &str) -> u32 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SpecificityTable {
    fn default() -> Self {
        Self::new(
            defaults::default_specificity_weights(),
            defaults::DEFAULT_SPECIFICITY_WEIGHT,
        )
    }
}
