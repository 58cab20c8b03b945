//! Term models shared by every pipeline phase and collaborator.

pub mod acronym_key;
pub mod canonical_term;
pub mod document;
pub mod link;
pub mod raw_record;
pub mod report;
pub mod source_batch;
pub mod specificity;

pub use acronym_key::{strip_parentheticals, AcronymKey};
pub use canonical_term::CanonicalTerm;
pub use document::GlossaryDocument;
pub use link::Link;
pub use raw_record::RawTermRecord;
pub use report::{
    CategoryCount, ChangeSummary, ConsolidationReport, ConsolidationWarning, Disambiguation,
    SourceSummary,
};
pub use source_batch::SourceBatch;
pub use specificity::SpecificityTable;
