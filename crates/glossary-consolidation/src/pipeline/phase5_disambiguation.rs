//! Phase 5: Disambiguation. When one acronym key yields several concept clusters,
//! give each cluster a distinguishing suffix: `"{key} ({suffix})"`.
//!
//! Suffix preference: a distinctive word from the cluster's name, then its
//! category when no sibling shares it, then the 1-based cluster index.

use std::collections::HashSet;

use glossary_core::models::{strip_parentheticals, AcronymKey, CanonicalTerm, Disambiguation};
use tracing::debug;

use super::phase3_clustering::ConceptCluster;

/// Sibling words shorter than or equal to this are ignored.
const MIN_OTHER_WORD_LEN: usize = 2;
/// Suffix words must be longer than this.
const MIN_SUFFIX_WORD_LEN: usize = 3;

/// Suffix for cluster `index` given its synthesized `name` and `category`.
pub fn find_distinguisher(
    index: usize,
    name: &str,
    category: &str,
    clusters: &[ConceptCluster],
    stop_words: &[String],
) -> String {
    let siblings = || {
        clusters
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != index)
            .flat_map(|(_, c)| c.members())
    };

    let other_words: HashSet<String> = siblings()
        .filter_map(|m| m.name.as_deref())
        .flat_map(|n| {
            n.to_lowercase()
                .split_whitespace()
                .filter(|w| w.chars().count() > MIN_OTHER_WORD_LEN)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    let clean = strip_parentheticals(name);
    for word in clean.split_whitespace() {
        let lower = word.to_lowercase();
        if word.chars().count() > MIN_SUFFIX_WORD_LEN
            && !other_words.contains(&lower)
            && !stop_words.contains(&lower)
        {
            return capitalize(word);
        }
    }

    let category_shared = siblings().any(|m| m.category.as_deref() == Some(category));
    if !category.is_empty() && !category_shared {
        return category.to_string();
    }

    (index + 1).to_string()
}

/// Assign suffixed acronyms to every term of a multi-cluster key.
///
/// `terms` is parallel to `clusters`. A suffix that would repeat a sibling's
/// acronym is replaced by the first free index.
pub fn disambiguate(
    key: &AcronymKey,
    clusters: &[ConceptCluster],
    terms: &mut [CanonicalTerm],
    stop_words: &[String],
) -> Disambiguation {
    let mut used: HashSet<String> = HashSet::new();
    used.insert(key.as_str().to_string());

    for (index, term) in terms.iter_mut().enumerate() {
        let suffix = find_distinguisher(index, &term.name, &term.category, clusters, stop_words);
        let mut acronym = key.with_suffix(&suffix);
        let mut fallback = index + 1;
        while used.contains(&acronym) {
            acronym = key.with_suffix(&fallback.to_string());
            fallback += 1;
        }
        debug!(key = %key, acronym = %acronym, "disambiguated cluster");
        used.insert(acronym.clone());
        term.acronym = acronym;
    }

    Disambiguation {
        key: key.as_str().to_string(),
        names: terms.iter().map(|t| t.name.clone()).collect(),
        acronyms: terms.iter().map(|t| t.acronym.clone()).collect(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use glossary_core::config::ConsolidationConfig;
    use glossary_core::models::RawTermRecord;

    use super::*;
    use crate::pipeline::phase2_grouping::group_by_acronym;
    use crate::pipeline::phase3_clustering::cluster_group;

    fn clusters_of(records: Vec<RawTermRecord>) -> Vec<ConceptCluster> {
        let group = group_by_acronym(records).remove(0);
        cluster_group(group, &ConsolidationConfig::default()).clusters
    }

    fn stop_words() -> Vec<String> {
        ConsolidationConfig::default().suffix_stop_words()
    }

    #[test]
    fn picks_first_distinctive_word() {
        let clusters = clusters_of(vec![
            RawTermRecord::new("AE", "Account Executive").with_category("Sales"),
            RawTermRecord::new("AE", "Application Engineering").with_category("Engineering"),
        ]);
        assert_eq!(clusters.len(), 2);
        let s = stop_words();
        assert_eq!(find_distinguisher(0, "Account Executive", "Sales", &clusters, &s), "Account");
        assert_eq!(
            find_distinguisher(1, "Application Engineering", "Engineering", &clusters, &s),
            "Application"
        );
    }

    #[test]
    fn skips_shared_short_and_stop_words() {
        let clusters = clusters_of(vec![
            RawTermRecord::new("SE", "Sales Engineer").with_category("Sales"),
            RawTermRecord::new("SE", "The Security Org").with_category("Security"),
        ]);
        let mut s = stop_words();
        s.push("security".into());
        // "The" is a stop word, "Security" configured, "Org" too short.
        assert_eq!(find_distinguisher(1, "The Security Org", "Security", &clusters, &s), "Security");
    }

    #[test]
    fn falls_back_to_category_then_index() {
        let clusters = clusters_of(vec![
            RawTermRecord::new("QM", "Quality").with_category("Sales"),
            RawTermRecord::new("QM", "Metrics").with_category("Engineering"),
            RawTermRecord::new("QM", "Quality Metrics").with_category("Sales"),
        ]);
        assert_eq!(clusters.len(), 2);
        let s = stop_words();
        // "metrics" appears in a sibling's member names, so the category decides.
        assert_eq!(find_distinguisher(1, "Metrics", "Engineering", &clusters, &s), "Engineering");
        assert_eq!(find_distinguisher(0, "Quality Metrics", "Sales", &clusters, &s), "Quality");
        assert_eq!(find_distinguisher(0, "Metrics", "Engineering", &clusters, &s), "1");
    }

    #[test]
    fn capitalizes_only_first_letter() {
        assert_eq!(capitalize("pIM"), "PIM");
        assert_eq!(capitalize("échelle"), "Échelle");
        assert_eq!(capitalize("account"), "Account");
    }

    #[test]
    fn colliding_suffixes_fall_back_to_index() {
        let clusters = clusters_of(vec![
            RawTermRecord::new("PO", "Order").with_category("Sales"),
            RawTermRecord::new("PO", "Purchase Engineering").with_category("Engineering"),
        ]);
        let key = AcronymKey::from_acronym("PO");
        let mut terms = vec![
            CanonicalTerm::new("PO", "Widget", "Sales"),
            CanonicalTerm::new("PO", "Widget", "Engineering"),
        ];
        let report = disambiguate(&key, &clusters, &mut terms, &stop_words());
        assert_eq!(terms[0].acronym, "PO (Widget)");
        assert_eq!(terms[1].acronym, "PO (2)");
        assert_eq!(report.key, "PO");
        assert_eq!(report.names, vec!["Widget", "Widget"]);
    }
}
