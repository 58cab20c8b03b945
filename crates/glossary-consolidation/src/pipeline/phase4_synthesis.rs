//! Phase 4: Field synthesis. Merge the members of one concept cluster into a
//! single canonical term.

use std::collections::{BTreeSet, HashMap, HashSet};

use glossary_core::config::ConsolidationConfig;
use glossary_core::models::{AcronymKey, CanonicalTerm, Link, RawTermRecord, SpecificityTable};

use super::phase3_clustering::ConceptCluster;
use crate::algorithms::sentence_splitter::split_sentences;
use crate::algorithms::similarity::{is_novel, word_overlap};

/// Longest member name, first on ties. Falls back to the key.
pub fn pick_name(members: &[RawTermRecord], key: &AcronymKey) -> String {
    let mut names: Vec<&str> = members.iter().filter_map(RawTermRecord::name_str).collect();
    // Stable: equal lengths keep encounter order.
    names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    names
        .first()
        .map(|n| n.to_string())
        .unwrap_or_else(|| key.as_str().to_string())
}

/// Merge descriptions into one text without near-duplicate sentences.
///
/// The longest description is the base; sentences from the others are appended
/// when their word overlap with every included sentence stays within the threshold.
pub fn combine_descriptions<'a, I>(descriptions: I, config: &ConsolidationConfig) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut valid: Vec<&str> = descriptions
        .into_iter()
        .flatten()
        .filter(|d| !d.trim().is_empty())
        .collect();
    match valid.len() {
        0 => return None,
        1 => return Some(valid[0].to_string()),
        _ => {}
    }

    valid.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    let mut combined = valid[0].to_string();
    let mut seen: Vec<String> = split_sentences(valid[0], config.min_sentence_len)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect();

    for description in &valid[1..] {
        for sentence in split_sentences(description, config.min_sentence_len) {
            let lowered = sentence.to_lowercase();
            let novel = seen.iter().all(|known| {
                is_novel(word_overlap(&lowered, known), config.sentence_overlap_threshold)
            });
            if novel {
                combined.push(' ');
                combined.push_str(&sentence);
                combined.push('.');
                seen.push(lowered);
            }
        }
    }

    Some(combined.trim().to_string())
}

/// Most specific category; ties go to the more frequent, then the first seen.
pub fn pick_category(members: &[RawTermRecord], table: &SpecificityTable, default: &str) -> String {
    let valid: Vec<&str> = members.iter().filter_map(RawTermRecord::category_str).collect();
    let Some(&first) = valid.first() else {
        return default.to_string();
    };

    let counts = counts_in_order(&valid);
    let count_of = |category: &str| {
        counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    };

    let mut best = first;
    let mut best_score = table.weight(best);
    for &(category, count) in &counts {
        let score = table.weight(category);
        if score > best_score || (score == best_score && count > count_of(best)) {
            best = category;
            best_score = score;
        }
    }
    best.to_string()
}

/// Most frequent non-empty owner, first seen on ties.
pub fn pick_owner(members: &[RawTermRecord]) -> Option<String> {
    let valid: Vec<&str> = members
        .iter()
        .filter_map(|m| m.owner.as_deref())
        .filter(|o| !o.is_empty())
        .collect();
    let counts = counts_in_order(&valid);
    let mut best = counts.first().copied()?;
    for &(owner, count) in &counts {
        if count > best.1 {
            best = (owner, count);
        }
    }
    Some(best.0.to_string())
}

/// Sorted union of related terms. `None` when empty.
pub fn merge_related_terms<'a, I>(lists: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = Option<&'a [String]>>,
{
    let merged: BTreeSet<&String> = lists.into_iter().flatten().flatten().collect();
    (!merged.is_empty()).then(|| merged.into_iter().cloned().collect())
}

/// Union of links keyed by URL, first occurrence wins. `None` when empty.
pub fn merge_links<'a, I>(lists: I) -> Option<Vec<Link>>
where
    I: IntoIterator<Item = Option<&'a [Link]>>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::new();
    for link in lists.into_iter().flatten().flatten() {
        if !link.url.is_empty() && seen.insert(link.url.as_str()) {
            merged.push(link.clone());
        }
    }
    (!merged.is_empty()).then_some(merged)
}

/// Build the canonical term for one cluster. The acronym is set by the caller.
pub fn synthesize(
    cluster: &ConceptCluster,
    key: &AcronymKey,
    acronym: String,
    config: &ConsolidationConfig,
    table: &SpecificityTable,
) -> CanonicalTerm {
    let members = cluster.members();
    CanonicalTerm {
        acronym,
        name: pick_name(members, key),
        category: pick_category(members, table, &config.default_category),
        description: combine_descriptions(members.iter().map(|m| m.description.as_deref()), config),
        owner: pick_owner(members),
        related_terms: merge_related_terms(members.iter().map(|m| m.related_terms.as_deref())),
        links: merge_links(members.iter().map(|m| m.links.as_deref())),
    }
}

/// Occurrence counts in first-seen order.
fn counts_in_order<'a>(values: &[&'a str]) -> Vec<(&'a str, usize)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for &value in values {
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}
