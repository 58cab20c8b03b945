//! # glossary-core
//!
//! Foundation crate for the glossary consolidation workspace.
//! Defines the term models, collaborator traits, errors, config, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GlossaryConfig;
pub use errors::{GlossaryError, GlossaryResult};
pub use models::{
    AcronymKey, CanonicalTerm, ConsolidationReport, GlossaryDocument, Link, RawTermRecord,
    SourceBatch, SpecificityTable,
};
