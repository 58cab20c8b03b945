//! End-to-end consolidation scenarios over in-memory sources and the shared fixtures.

use glossary_consolidation::pipeline::{run_pipeline, PipelineInput};
use glossary_consolidation::ConsolidationEngine;
use glossary_core::config::GlossaryConfig;
use glossary_core::errors::SourceReadError;
use glossary_core::models::{
    CanonicalTerm, ConsolidationWarning, GlossaryDocument, Link, RawTermRecord, SourceBatch,
};

fn engine() -> ConsolidationEngine {
    ConsolidationEngine::default()
}

fn batch(source: &str, records: Vec<RawTermRecord>) -> SourceBatch {
    SourceBatch::new(source, records)
}

fn acronyms(doc: &GlossaryDocument) -> Vec<&str> {
    doc.terms.iter().map(|t| t.acronym.as_str()).collect()
}

#[test]
fn plural_variants_merge_into_one_term() {
    let output = engine().consolidate_batches(
        vec![batch(
            "eng.json",
            vec![
                RawTermRecord::new("ADR", "Architecture Decision Record").with_category("Engineering"),
                RawTermRecord::new("ADR", "Architecture Decision Records").with_category("Engineering"),
            ],
        )],
        None,
    );
    assert_eq!(output.document.terms.len(), 1);
    let term = &output.document.terms[0];
    assert_eq!(term.acronym, "ADR");
    assert_eq!(term.name, "Architecture Decision Records");
    assert!(output.report.disambiguations.is_empty());
}

#[test]
fn distinct_concepts_under_one_acronym_are_disambiguated() {
    let output = engine().consolidate_batches(
        vec![batch(
            "mixed.json",
            vec![
                RawTermRecord::new("AE", "Account Executive").with_category("Sales"),
                RawTermRecord::new("AE", "Application Engineering").with_category("Engineering"),
            ],
        )],
        None,
    );
    assert_eq!(acronyms(&output.document), vec!["AE (Account)", "AE (Application)"]);
    assert_eq!(output.report.disambiguations.len(), 1);
    assert_eq!(
        output.report.disambiguations[0].names,
        vec!["Account Executive", "Application Engineering"]
    );
}

#[test]
fn parenthetical_only_acronyms_are_dropped_not_suffixed() {
    let output = engine().consolidate_batches(
        vec![batch(
            "notes.json",
            vec![
                RawTermRecord::new("(Sales)", "Account Executive").with_category("Sales"),
                RawTermRecord::new("(Eng)", "Application Engineering").with_category("Engineering"),
            ],
        )],
        None,
    );
    assert!(output.document.terms.is_empty());
    assert_eq!(output.report.dropped_terms, 2);
    assert!(output.report.disambiguations.is_empty());
    assert!(output.report.warnings.iter().all(|w| match w {
        ConsolidationWarning::TermDropped { acronym, .. } => !acronym.contains(" ("),
        _ => true,
    }));
}

#[test]
fn oversized_description_is_truncated() {
    let output = engine().consolidate_batches(
        vec![batch(
            "long.json",
            vec![RawTermRecord::new("PIM", "Product Information Management")
                .with_category("Product")
                .with_description("d".repeat(2500))],
        )],
        None,
    );
    let description = output.document.terms[0].description.as_deref().unwrap();
    assert_eq!(description.chars().count(), 2000);
    assert_eq!(&description[..1997], "d".repeat(1997));
    assert!(description.ends_with("..."));
    assert_eq!(output.report.truncated_descriptions, 1);
}

#[test]
fn unreadable_source_is_reported_and_others_survive() {
    let input = PipelineInput {
        sources: vec![
            Err(SourceReadError::Parse {
                source_id: "broken.json".into(),
                message: "EOF while parsing".into(),
            }),
            Ok(batch("ok.json", vec![RawTermRecord::new("OKR", "Objectives and Key Results").with_category("Product")])),
        ],
        baseline: Ok(None),
    };
    let output = run_pipeline(input, &GlossaryConfig::default());
    assert_eq!(acronyms(&output.document), vec!["OKR"]);
    assert!(output.report.warnings.iter().any(|w| matches!(
        w,
        ConsolidationWarning::SourceSkipped { source_id, .. } if source_id == "broken.json"
    )));
}

#[test]
fn merged_lists_keep_every_input_entry() {
    let output = engine().consolidate_batches(
        vec![
            batch(
                "a.json",
                vec![RawTermRecord::new("SLA", "Service Level Agreement")
                    .with_category("Engineering")
                    .with_related_terms(["SLO"])
                    .with_links(vec![Link::new("https://a", "a")])],
            ),
            batch(
                "b.json",
                vec![RawTermRecord::new("SLA", "Service Level Agreements")
                    .with_category("Engineering")
                    .with_related_terms(["SLI", "SLO"])
                    .with_links(vec![Link::new("https://b", "b"), Link::new("https://a", "dup")])],
            ),
        ],
        None,
    );
    let term = &output.document.terms[0];
    assert_eq!(term.related_terms, Some(vec!["SLI".to_string(), "SLO".to_string()]));
    assert_eq!(
        term.links,
        Some(vec![Link::new("https://a", "a"), Link::new("https://b", "b")])
    );
}

#[test]
fn three_concepts_receive_pairwise_distinct_acronyms() {
    let mut config = GlossaryConfig::default();
    config
        .consolidation
        .incompatible_categories
        .push(["Finance".to_string(), "Sales".to_string()]);
    let output = ConsolidationEngine::new(config).consolidate_batches(
        vec![batch(
            "pm.json",
            vec![
                RawTermRecord::new("PM", "Product Manager").with_category("Sales"),
                RawTermRecord::new("PM", "Project Engineering").with_category("Engineering"),
                RawTermRecord::new("PM", "Payment Finance").with_category("Finance"),
            ],
        )],
        None,
    );
    assert_eq!(
        acronyms(&output.document),
        vec!["PM (Payment)", "PM (Product)", "PM (Project)"]
    );
    assert_eq!(output.report.disambiguations[0].acronyms.len(), 3);
}

#[test]
fn fixture_sources_merge_onto_baseline() {
    let output = engine().consolidate_batches(
        test_fixtures::load_source_batches(),
        Some(test_fixtures::load_baseline()),
    );
    assert_eq!(output.document, test_fixtures::load_published());

    let report = &output.report;
    assert_eq!(report.total_input_records, 9);
    assert_eq!(report.baseline_terms, 2);
    assert_eq!(report.unique_keys, 6);
    assert_eq!(report.multi_record_keys, 3);
    assert_eq!(report.stripped_fields, 1);
    assert_eq!(report.disambiguations.len(), 1);
    assert_eq!(report.disambiguations[0].key, "AE");

    let changes = report.changes.clone().unwrap_or_default();
    assert_eq!(changes.added, vec!["ADR", "AE (Account)", "AE (Application)", "API", "QBR"]);
    assert_eq!(changes.updated, vec!["CI/CD"]);
    assert!(changes.removed.is_empty());
    assert_eq!(changes.unchanged, 1);
}

#[test]
fn published_glossary_reconsolidates_to_itself() {
    let published = test_fixtures::load_published();
    let output = engine().consolidate_batches(vec![], Some(published.clone()));
    assert_eq!(output.document, published);
    assert!(output.report.changes.unwrap_or_default().is_empty());
    assert_eq!(output.report.fingerprint, published.fingerprint());
}

#[test]
fn check_flags_a_hand_edited_glossary() {
    let mut doc = test_fixtures::load_published();
    doc.terms.push(CanonicalTerm::new("OKR", "Duplicate", "Product"));
    doc.terms.push(CanonicalTerm::new("X".repeat(60), "Too long", "Product"));
    let problems = engine().check(&doc);
    assert_eq!(problems.len(), 2);
    assert!(engine().check(&test_fixtures::load_published()).is_empty());
}
