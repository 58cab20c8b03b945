use std::sync::{Mutex, PoisonError};

use glossary_core::errors::SinkError;
use glossary_core::models::GlossaryDocument;
use glossary_core::traits::IOutputSink;

/// Keeps every written document in memory. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    written: Mutex<Vec<GlossaryDocument>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every document written so far, oldest first.
    pub fn documents(&self) -> Vec<GlossaryDocument> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<GlossaryDocument> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl IOutputSink for MemorySink {
    fn write(&self, document: &GlossaryDocument) -> Result<(), SinkError> {
        self.written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(document.clone());
        Ok(())
    }
}
