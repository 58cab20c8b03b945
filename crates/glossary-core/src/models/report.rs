use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records read from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub source_id: String,
    pub records: usize,
}

/// An acronym key that denotes more than one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disambiguation {
    pub key: String,
    /// Chosen name of each cluster, in cluster order.
    pub names: Vec<String>,
    /// Final acronym of each cluster, parallel to `names`.
    pub acronyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Difference between the new canonical set and the baseline it was seeded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
    pub unchanged: usize,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// A non-fatal problem recorded during consolidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsolidationWarning {
    /// A whole source (or the baseline) was unreadable and skipped.
    SourceSkipped {
        source_id: String,
        code: String,
        message: String,
    },
    /// One element of an otherwise readable source was skipped.
    RecordSkipped {
        source_id: String,
        index: usize,
        message: String,
    },
    /// A merged term failed validation and was dropped.
    TermDropped {
        acronym: String,
        code: String,
        message: String,
    },
    /// A merged description exceeded the length limit and was cut.
    DescriptionTruncated { acronym: String, original_len: usize },
    /// Neither sources nor a baseline supplied any record.
    EmptyInput,
}

impl fmt::Display for ConsolidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceSkipped { message, .. } => write!(f, "skipped source: {message}"),
            Self::RecordSkipped { message, .. } => write!(f, "skipped record: {message}"),
            Self::TermDropped { message, .. } => write!(f, "invalid term skipped: {message}"),
            Self::DescriptionTruncated {
                acronym,
                original_len,
            } => write!(
                f,
                "description of '{acronym}' truncated from {original_len} characters"
            ),
            Self::EmptyInput => f.write_str("no sources and no baseline supplied any terms"),
        }
    }
}

/// Diagnostics of one consolidation run, consumed by operator tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub sources: Vec<SourceSummary>,
    pub baseline_terms: usize,
    pub total_input_records: usize,
    pub unique_keys: usize,
    /// Keys fed by more than one record.
    pub multi_record_keys: usize,
    pub disambiguations: Vec<Disambiguation>,
    pub output_terms: usize,
    pub dropped_terms: usize,
    pub truncated_descriptions: usize,
    /// Acronym collisions resolved by the final assembly pass.
    pub collisions_merged: usize,
    /// Non-schema keys discarded from raw records.
    pub stripped_fields: usize,
    /// Sorted by count, descending.
    pub category_breakdown: Vec<CategoryCount>,
    /// Present only when a baseline was loaded.
    pub changes: Option<ChangeSummary>,
    pub fingerprint: String,
    pub warnings: Vec<ConsolidationWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_serialize_with_kind_tag() {
        let warning = ConsolidationWarning::SourceSkipped {
            source_id: "broken.json".into(),
            code: "SOURCE_PARSE".into(),
            message: "failed to parse broken.json".into(),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "source_skipped");
        assert_eq!(json["source_id"], "broken.json");
    }

    #[test]
    fn warning_display_mentions_subject() {
        let warning = ConsolidationWarning::DescriptionTruncated {
            acronym: "PIM".into(),
            original_len: 2500,
        };
        let text = warning.to_string();
        assert!(text.contains("PIM"));
        assert!(text.contains("2500"));
    }

    #[test]
    fn empty_change_summary() {
        assert!(ChangeSummary::default().is_empty());
    }
}
