//! # glossary-io
//!
//! File-backed implementations of the glossary collaborator traits, plus the
//! Markdown/CSV/list exports and `GlossaryContext`, which wires the loaders,
//! engine, and sink together for one project root.

pub mod context;
pub mod export;
pub mod sink;
pub mod source;

pub use context::GlossaryContext;
pub use export::ExportFormat;
pub use sink::{JsonFileSink, MemorySink};
pub use source::{DirectorySourceLoader, JsonBaselineLoader};
