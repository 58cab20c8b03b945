use std::sync::Arc;

use crate::errors::SinkError;
use crate::models::GlossaryDocument;

/// Persists the final canonical glossary.
pub trait IOutputSink: Send + Sync {
    fn write(&self, document: &GlossaryDocument) -> Result<(), SinkError>;
}

impl<T: IOutputSink + ?Sized> IOutputSink for Arc<T> {
    fn write(&self, document: &GlossaryDocument) -> Result<(), SinkError> {
        (**self).write(document)
    }
}
