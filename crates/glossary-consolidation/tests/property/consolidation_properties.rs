use std::collections::{BTreeSet, HashSet};

use glossary_consolidation::algorithms::sentence_splitter::split_sentences;
use glossary_consolidation::algorithms::similarity::word_overlap;
use glossary_consolidation::pipeline::phase2_grouping::group_by_acronym;
use glossary_consolidation::pipeline::phase4_synthesis::combine_descriptions;
use glossary_consolidation::ConsolidationEngine;
use glossary_core::config::ConsolidationConfig;
use glossary_core::models::{AcronymKey, Link, RawTermRecord, SourceBatch};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Engineering", "Sales", "Finance", "Security", "Product", "GitHub Repos"];

fn category() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORIES).prop_map(str::to_string)
}

fn name() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{2,8}", 1..4).prop_map(|words| words.join(" "))
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,8}", 3..9).prop_map(|words| format!("{}.", words.join(" ")))
}

fn record(acronyms: &'static [&'static str]) -> impl Strategy<Value = RawTermRecord> {
    (
        prop::sample::select(acronyms),
        name(),
        category(),
        prop::collection::vec("[A-Z]{2,4}", 0..3),
        prop::collection::vec("[a-z]{1,5}", 0..3),
    )
        .prop_map(|(acronym, name, category, related, paths)| {
            RawTermRecord::new(acronym, name)
                .with_category(category)
                .with_related_terms(related)
                .with_links(
                    paths
                        .into_iter()
                        .map(|p| Link::new(format!("https://docs.example/{p}"), p))
                        .collect(),
                )
        })
}

proptest! {
    #[test]
    fn key_strips_trailing_parenthetical(
        key in "[A-Z][A-Z0-9/]{0,5}",
        lead in "[ \t]{0,2}",
        gap in " {0,2}",
        note in "[A-Za-z ]{1,12}",
        trail in " {0,2}",
    ) {
        let raw = format!("{lead}{key}{gap}({note}){trail}");
        let suffixed = AcronymKey::from_acronym(&raw);
        prop_assert_eq!(suffixed.as_str(), key.as_str());
        let bare = format!("{lead}{key}{trail}");
        let plain = AcronymKey::from_acronym(&bare);
        prop_assert_eq!(plain.as_str(), key.as_str());
    }

    #[test]
    fn groups_partition_records_by_key(
        records in prop::collection::vec(record(&["AE", "AE (Sales)", " PM", "PM (Ops) ", "API"]), 0..20)
    ) {
        let keys: Vec<AcronymKey> = records.iter().map(|r| AcronymKey::from_acronym(&r.acronym)).collect();
        let distinct: HashSet<&AcronymKey> = keys.iter().collect();
        let groups = group_by_acronym(records.clone());
        prop_assert_eq!(groups.len(), distinct.len());
        prop_assert_eq!(groups.iter().map(|g| g.records.len()).sum::<usize>(), records.len());
        for group in &groups {
            for member in &group.records {
                prop_assert_eq!(&AcronymKey::from_acronym(&member.acronym), &group.key);
            }
        }
    }

    #[test]
    fn output_acronyms_are_pairwise_distinct(
        records in prop::collection::vec(record(&["AE", "PM", "SE"]), 1..16)
    ) {
        let output = ConsolidationEngine::default()
            .consolidate_batches(vec![SourceBatch::new("gen.json", records)], None);
        let acronyms: Vec<&str> = output.document.terms.iter().map(|t| t.acronym.as_str()).collect();
        let unique: HashSet<&str> = acronyms.iter().copied().collect();
        prop_assert_eq!(unique.len(), acronyms.len());
        for d in &output.report.disambiguations {
            let siblings: HashSet<&String> = d.acronyms.iter().collect();
            prop_assert_eq!(siblings.len(), d.acronyms.len());
            prop_assert!(!siblings.contains(&d.key));
        }
    }

    #[test]
    fn related_terms_and_links_are_never_lost(
        records in prop::collection::vec(record(&["AE", "PM", "SE", "API"]), 1..16)
    ) {
        let output = ConsolidationEngine::default()
            .consolidate_batches(vec![SourceBatch::new("gen.json", records.clone())], None);
        for record in &records {
            let key = AcronymKey::from_acronym(&record.acronym);
            let terms: Vec<_> = output
                .document
                .terms
                .iter()
                .filter(|t| AcronymKey::from_acronym(&t.acronym) == key)
                .collect();
            let related: BTreeSet<&String> = terms.iter().flat_map(|t| t.related_terms.iter().flatten()).collect();
            let urls: BTreeSet<&str> = terms
                .iter()
                .flat_map(|t| t.links.iter().flatten())
                .map(|l| l.url.as_str())
                .collect();
            for term in record.related_terms.iter().flatten() {
                prop_assert!(related.contains(term), "lost related term {}", term);
            }
            for link in record.links.iter().flatten() {
                prop_assert!(urls.contains(link.url.as_str()), "lost link {}", link.url);
            }
        }
    }

    #[test]
    fn merged_description_has_no_near_duplicate_sentences(
        descriptions in prop::collection::vec(sentence(), 2..8)
    ) {
        let config = ConsolidationConfig::default();
        let merged = combine_descriptions(descriptions.iter().map(|d| Some(d.as_str())), &config);
        prop_assert!(merged.is_some());
        let sentences: Vec<String> = split_sentences(&merged.unwrap_or_default(), config.min_sentence_len)
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect();
        for (i, a) in sentences.iter().enumerate() {
            for b in &sentences[i + 1..] {
                prop_assert!(
                    word_overlap(a, b) <= config.sentence_overlap_threshold,
                    "{:?} vs {:?}", a, b
                );
            }
        }
    }

    #[test]
    fn reconsolidating_output_is_stable(
        entries in prop::collection::btree_map(
            "[A-Z]{2,5}",
            (name(), prop::collection::vec((category(), prop::option::of(sentence())), 1..4)),
            1..10,
        )
    ) {
        let records: Vec<RawTermRecord> = entries
            .iter()
            .flat_map(|(acronym, (name, variants))| {
                variants.iter().map(move |(category, description)| {
                    let record = RawTermRecord::new(acronym.as_str(), name.as_str()).with_category(category.as_str());
                    match description {
                        Some(d) => record.with_description(d.as_str()),
                        None => record,
                    }
                })
            })
            .collect();
        let engine = ConsolidationEngine::default();
        let first = engine.consolidate_batches(vec![SourceBatch::new("gen.json", records)], None);
        let second = engine.consolidate_batches(vec![], Some(first.document.clone()));
        prop_assert_eq!(&second.document, &first.document);
        prop_assert!(second.report.changes.unwrap_or_default().is_empty());
    }
}
