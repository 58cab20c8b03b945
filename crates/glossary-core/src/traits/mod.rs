//! Seams to the external collaborators of the consolidation engine.

pub mod sink;
pub mod source;

pub use sink::IOutputSink;
pub use source::{IBaselineLoader, ISourceLoader};
