//! Change tracking of a consolidated glossary against its baseline.

use std::collections::HashMap;

use glossary_core::models::{CanonicalTerm, ChangeSummary, GlossaryDocument};

/// Acronyms added, updated and removed in `output` relative to `baseline`.
///
/// Each list is in the order the acronyms appear in its document.
pub fn compute_changes(baseline: &GlossaryDocument, output: &GlossaryDocument) -> ChangeSummary {
    let before: HashMap<&str, &CanonicalTerm> = baseline
        .terms
        .iter()
        .map(|t| (t.acronym.as_str(), t))
        .collect();
    let after: HashMap<&str, &CanonicalTerm> = output
        .terms
        .iter()
        .map(|t| (t.acronym.as_str(), t))
        .collect();

    let mut summary = ChangeSummary::default();
    for term in &output.terms {
        match before.get(term.acronym.as_str()) {
            None => summary.added.push(term.acronym.clone()),
            Some(previous) if *previous != term => summary.updated.push(term.acronym.clone()),
            Some(_) => summary.unchanged += 1,
        }
    }
    summary.removed = baseline
        .terms
        .iter()
        .filter(|t| !after.contains_key(t.acronym.as_str()))
        .map(|t| t.acronym.clone())
        .collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(terms: Vec<CanonicalTerm>) -> GlossaryDocument {
        GlossaryDocument::with_default_schema(terms)
    }

    #[test]
    fn detects_added_updated_removed() {
        let baseline = doc(vec![
            CanonicalTerm::new("ADR", "Architecture Decision Record", "Engineering"),
            CanonicalTerm::new("OKR", "Objectives and Key Results", "Product"),
            CanonicalTerm::new("PIM", "Product Information Management", "Product"),
        ]);
        let output = doc(vec![
            CanonicalTerm::new("ADR", "Architecture Decision Record", "Engineering"),
            CanonicalTerm::new("API", "Application Programming Interface", "Engineering"),
            CanonicalTerm::new("PIM", "Product Information Management", "Retail"),
        ]);
        let changes = compute_changes(&baseline, &output);
        assert_eq!(changes.added, vec!["API"]);
        assert_eq!(changes.updated, vec!["PIM"]);
        assert_eq!(changes.removed, vec!["OKR"]);
        assert_eq!(changes.unchanged, 1);
    }

    #[test]
    fn identical_documents_have_no_changes() {
        let d = doc(vec![CanonicalTerm::new("ADR", "Architecture Decision Record", "Engineering")]);
        let changes = compute_changes(&d, &d.clone());
        assert!(changes.is_empty());
        assert_eq!(changes.unchanged, 1);
    }
}
