//! Phase 1: Aggregation. Flatten every source plus the baseline into one ordered
//! record stream, tag provenance, fold legacy field names.

use glossary_core::constants::BASELINE_PROVENANCE;
use glossary_core::errors::{GlossaryErrorCode, SourceReadError};
use glossary_core::models::{
    ConsolidationWarning, GlossaryDocument, RawTermRecord, SourceBatch, SourceSummary,
};
use tracing::{debug, warn};

/// Output of the aggregation phase.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Source records in source order, then baseline records.
    pub records: Vec<RawTermRecord>,
    /// Records contributed by each readable source.
    pub sources: Vec<SourceSummary>,
    /// Terms contributed by the baseline.
    pub baseline_terms: usize,
    /// The baseline as loaded, kept for change tracking.
    pub baseline: Option<GlossaryDocument>,
    /// Non-schema keys removed from raw records.
    pub stripped_fields: usize,
}

/// Aggregate loaded sources and the optional baseline.
///
/// Unreadable sources and unparseable records become warnings; this phase never fails.
pub fn aggregate(
    sources: Vec<Result<SourceBatch, SourceReadError>>,
    baseline: Result<Option<GlossaryDocument>, SourceReadError>,
    warnings: &mut Vec<ConsolidationWarning>,
) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for source in sources {
        let batch = match source {
            Ok(batch) => batch,
            Err(err) => {
                warn!(source = %err.source_id(), error = %err, "skipping unreadable source");
                warnings.push(source_skipped(&err));
                continue;
            }
        };

        for rejected in &batch.rejected {
            warn!(source = %batch.source_id, error = %rejected, "skipping invalid record");
            warnings.push(record_skipped(rejected));
        }

        aggregation.sources.push(SourceSummary {
            source_id: batch.source_id.clone(),
            records: batch.records.len(),
        });
        debug!(source = %batch.source_id, records = batch.records.len(), "aggregated source");

        for record in batch.records {
            let record = normalize_record(record, &batch.source_id, &mut aggregation.stripped_fields);
            aggregation.records.push(record);
        }
    }

    match baseline {
        Ok(Some(document)) => {
            aggregation.baseline_terms = document.terms.len();
            aggregation.records.extend(
                document
                    .terms
                    .iter()
                    .map(|term| RawTermRecord::from_canonical(term, BASELINE_PROVENANCE)),
            );
            aggregation.baseline = Some(document);
        }
        Ok(None) => debug!("no baseline glossary, starting from sources only"),
        Err(err) => {
            warn!(error = %err, "skipping unreadable baseline");
            warnings.push(source_skipped(&err));
        }
    }

    aggregation
}

/// Tag provenance, fold `related` into `related_terms`, drop non-schema keys.
pub fn normalize_record(
    mut record: RawTermRecord,
    source_id: &str,
    stripped_fields: &mut usize,
) -> RawTermRecord {
    if let Some(related) = record.related.take() {
        if record.related_terms.is_none() {
            record.related_terms = Some(related);
        }
    }
    *stripped_fields += record.extra.len();
    record.extra.clear();
    record.provenance = source_id.to_string();
    record
}

fn source_skipped(err: &SourceReadError) -> ConsolidationWarning {
    ConsolidationWarning::SourceSkipped {
        source_id: err.source_id().to_string(),
        code: err.error_code().to_string(),
        message: err.to_string(),
    }
}

fn record_skipped(err: &SourceReadError) -> ConsolidationWarning {
    let index = match err {
        SourceReadError::InvalidRecord { index, .. } => *index,
        _ => 0,
    };
    ConsolidationWarning::RecordSkipped {
        source_id: err.source_id().to_string(),
        index,
        message: err.to_string(),
    }
}
