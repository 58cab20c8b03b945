//! Phase 7: Assembly. Merge terms that ended up with the same acronym, then sort.

use std::collections::HashMap;

use glossary_core::config::{ConsolidationConfig, ValidationConfig};
use glossary_core::models::CanonicalTerm;
use tracing::debug;

use super::phase4_synthesis::{combine_descriptions, merge_links, merge_related_terms};
use super::phase6_validation::truncate_description;
use crate::algorithms::collation::locale_compare;

/// Sorted, acronym-unique terms.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub terms: Vec<CanonicalTerm>,
    /// Terms folded into an earlier term with the same acronym.
    pub collisions_merged: usize,
}

/// Fold `other` into `base`: descriptions, links and related terms combine;
/// every other field of `base` wins.
pub fn merge_into(
    base: &mut CanonicalTerm,
    other: CanonicalTerm,
    consolidation: &ConsolidationConfig,
    validation: &ValidationConfig,
) {
    base.description = combine_descriptions(
        [base.description.as_deref(), other.description.as_deref()],
        consolidation,
    );
    if let Some(description) = base.description.as_mut() {
        truncate_description(description, validation);
    }
    base.links = merge_links([base.links.as_deref(), other.links.as_deref()]);
    base.related_terms =
        merge_related_terms([base.related_terms.as_deref(), other.related_terms.as_deref()]);
}

/// Deduplicate by acronym, first seen is the base, and sort by acronym.
pub fn assemble(
    terms: Vec<CanonicalTerm>,
    consolidation: &ConsolidationConfig,
    validation: &ValidationConfig,
) -> Assembly {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<CanonicalTerm> = Vec::with_capacity(terms.len());
    let mut collisions_merged = 0;

    for term in terms {
        match slots.get(&term.acronym) {
            Some(&slot) => {
                debug!(acronym = %term.acronym, "merging colliding acronym");
                merge_into(&mut unique[slot], term, consolidation, validation);
                collisions_merged += 1;
            }
            None => {
                slots.insert(term.acronym.clone(), unique.len());
                unique.push(term);
            }
        }
    }

    unique.sort_by(|a, b| locale_compare(&a.acronym, &b.acronym));
    Assembly {
        terms: unique,
        collisions_merged,
    }
}
