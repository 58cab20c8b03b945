//! Assemble the `ConsolidationReport` for one run.

use chrono::Utc;
use glossary_core::models::{
    ConsolidationReport, ConsolidationWarning, Disambiguation, GlossaryDocument, SourceSummary,
};
use uuid::Uuid;

use super::{category_breakdown, compute_changes};

/// Counters collected while the pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub sources: Vec<SourceSummary>,
    pub baseline_terms: usize,
    pub total_input_records: usize,
    pub unique_keys: usize,
    pub multi_record_keys: usize,
    pub disambiguations: Vec<Disambiguation>,
    pub dropped_terms: usize,
    pub truncated_descriptions: usize,
    pub collisions_merged: usize,
    pub stripped_fields: usize,
}

/// Build the report for `document`. Change tracking runs only with a baseline.
pub fn build_report(
    stats: RunStats,
    document: &GlossaryDocument,
    baseline: Option<&GlossaryDocument>,
    warnings: Vec<ConsolidationWarning>,
) -> ConsolidationReport {
    ConsolidationReport {
        run_id: Uuid::new_v4().to_string(),
        generated_at: Utc::now(),
        sources: stats.sources,
        baseline_terms: stats.baseline_terms,
        total_input_records: stats.total_input_records,
        unique_keys: stats.unique_keys,
        multi_record_keys: stats.multi_record_keys,
        disambiguations: stats.disambiguations,
        output_terms: document.terms.len(),
        dropped_terms: stats.dropped_terms,
        truncated_descriptions: stats.truncated_descriptions,
        collisions_merged: stats.collisions_merged,
        stripped_fields: stats.stripped_fields,
        category_breakdown: category_breakdown(&document.terms),
        changes: baseline.map(|b| compute_changes(b, document)),
        fingerprint: document.fingerprint(),
        warnings,
    }
}
