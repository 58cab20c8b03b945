use crate::errors::SourceReadError;
use crate::models::{GlossaryDocument, SourceBatch};

/// Supplies raw term records, one batch per source.
pub trait ISourceLoader: Send + Sync {
    /// Load every source in a stable, deterministic order.
    ///
    /// A source that cannot be read is returned as an `Err` in its slot so the
    /// caller can skip it and keep going.
    fn load_sources(&self) -> Vec<Result<SourceBatch, SourceReadError>>;
}

/// Supplies the previously published canonical glossary, if any.
pub trait IBaselineLoader: Send + Sync {
    /// `Ok(None)` when no baseline exists.
    fn load_baseline(&self) -> Result<Option<GlossaryDocument>, SourceReadError>;
}

impl ISourceLoader for Vec<SourceBatch> {
    fn load_sources(&self) -> Vec<Result<SourceBatch, SourceReadError>> {
        self.iter().cloned().map(Ok).collect()
    }
}

impl IBaselineLoader for Option<GlossaryDocument> {
    fn load_baseline(&self) -> Result<Option<GlossaryDocument>, SourceReadError> {
        Ok(self.clone())
    }
}
