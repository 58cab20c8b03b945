//! 7-phase consolidation pipeline orchestrator.
//!
//! Phase 1: Aggregation → Phase 2: Grouping → Phase 3: Clustering →
//! Phase 4: Synthesis → Phase 5: Disambiguation → Phase 6: Validation →
//! Phase 7: Assembly

pub mod phase1_aggregation;
pub mod phase2_grouping;
pub mod phase3_clustering;
pub mod phase4_synthesis;
pub mod phase5_disambiguation;
pub mod phase6_validation;
pub mod phase7_assembly;

use glossary_core::config::GlossaryConfig;
use glossary_core::errors::{GlossaryErrorCode, SourceReadError};
use glossary_core::models::{
    CanonicalTerm, ConsolidationReport, ConsolidationWarning, GlossaryDocument, SourceBatch,
};
use tracing::{debug, info, warn};

use crate::monitoring::{build_report, RunStats};

/// Everything the collaborators supplied for one run.
#[derive(Debug, Clone)]
pub struct PipelineInput {
    pub sources: Vec<Result<SourceBatch, SourceReadError>>,
    pub baseline: Result<Option<GlossaryDocument>, SourceReadError>,
}

impl PipelineInput {
    pub fn new(sources: Vec<SourceBatch>, baseline: Option<GlossaryDocument>) -> Self {
        Self {
            sources: sources.into_iter().map(Ok).collect(),
            baseline: Ok(baseline),
        }
    }
}

/// The canonical glossary plus the diagnostics of the run that produced it.
#[derive(Debug, Clone)]
pub struct ConsolidationOutput {
    pub document: GlossaryDocument,
    pub report: ConsolidationReport,
}

/// Run the full 7-phase consolidation pipeline.
///
/// Never fails: unreadable sources and invalid terms become report warnings,
/// and empty input yields an empty glossary.
pub fn run_pipeline(input: PipelineInput, config: &GlossaryConfig) -> ConsolidationOutput {
    let consolidation = &config.consolidation;
    let validation = &config.validation;
    let table = consolidation.specificity_table();
    let stop_words = consolidation.suffix_stop_words();
    let mut warnings = Vec::new();
    let mut stats = RunStats::default();

    // Phase 1: Aggregation.
    let aggregation = phase1_aggregation::aggregate(input.sources, input.baseline, &mut warnings);
    stats.sources = aggregation.sources;
    stats.baseline_terms = aggregation.baseline_terms;
    stats.stripped_fields = aggregation.stripped_fields;
    stats.total_input_records = aggregation.records.len();
    let baseline = aggregation.baseline;
    info!(
        count = stats.total_input_records,
        sources = stats.sources.len(),
        baseline = stats.baseline_terms,
        "Phase 1: aggregated records"
    );

    if aggregation.records.is_empty() {
        warn!("no sources and no baseline supplied any terms");
        warnings.push(ConsolidationWarning::EmptyInput);
    }

    // Phase 2: Grouping.
    let groups = phase2_grouping::group_by_acronym(aggregation.records);
    stats.unique_keys = groups.len();
    stats.multi_record_keys = groups.iter().filter(|g| g.records.len() > 1).count();
    info!(
        keys = stats.unique_keys,
        multi = stats.multi_record_keys,
        "Phase 2: grouped by acronym"
    );

    let mut merged: Vec<CanonicalTerm> = Vec::with_capacity(groups.len());
    for group in groups {
        // Phase 3: Clustering.
        let clustered = phase3_clustering::cluster_group(group, consolidation);

        // Phase 4: Synthesis.
        let default_acronym = clustered
            .singleton_acronym
            .clone()
            .unwrap_or_else(|| clustered.key.as_str().to_string());
        let mut terms: Vec<CanonicalTerm> = clustered
            .clusters
            .iter()
            .map(|cluster| {
                phase4_synthesis::synthesize(
                    cluster,
                    &clustered.key,
                    default_acronym.clone(),
                    consolidation,
                    &table,
                )
            })
            .collect();

        // Phase 5: Disambiguation. An empty key stays unsuffixed so validation drops it.
        if clustered.clusters.len() > 1 && !clustered.key.is_empty() {
            let disambiguation = phase5_disambiguation::disambiguate(
                &clustered.key,
                &clustered.clusters,
                &mut terms,
                &stop_words,
            );
            info!(
                key = %disambiguation.key,
                clusters = disambiguation.acronyms.len(),
                names = %disambiguation.names.join(" | "),
                "Phase 5: disambiguated acronym"
            );
            stats.disambiguations.push(disambiguation);
        }

        // Phase 6: Validation.
        for term in terms {
            match phase6_validation::validate_term(term, validation) {
                Ok(validated) => {
                    if let Some(original_len) = validated.truncated_from {
                        debug!(acronym = %validated.term.acronym, original_len, "Phase 6: truncated description");
                        stats.truncated_descriptions += 1;
                        warnings.push(ConsolidationWarning::DescriptionTruncated {
                            acronym: validated.term.acronym.clone(),
                            original_len,
                        });
                    }
                    merged.push(validated.term);
                }
                Err(err) => {
                    warn!(acronym = %err.acronym(), error = %err, "Phase 6: invalid term skipped");
                    stats.dropped_terms += 1;
                    warnings.push(ConsolidationWarning::TermDropped {
                        acronym: err.acronym().to_string(),
                        code: err.error_code().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }
    info!(
        valid = merged.len(),
        dropped = stats.dropped_terms,
        truncated = stats.truncated_descriptions,
        "Phase 6: validation complete"
    );

    // Phase 7: Assembly.
    let assembly = phase7_assembly::assemble(merged, consolidation, validation);
    stats.collisions_merged = assembly.collisions_merged;
    info!(
        terms = assembly.terms.len(),
        collisions = assembly.collisions_merged,
        "Phase 7: assembled glossary"
    );

    let document = GlossaryDocument::new(config.output.schema.clone(), assembly.terms);
    let report = build_report(stats, &document, baseline.as_ref(), warnings);

    info!(
        terms = report.output_terms,
        warnings = report.warnings.len(),
        fingerprint = %report.fingerprint,
        "Consolidation pipeline complete"
    );

    ConsolidationOutput { document, report }
}
