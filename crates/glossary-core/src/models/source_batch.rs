use super::RawTermRecord;
use crate::errors::SourceReadError;

/// All records successfully read from one source.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Source identifier, usually the file name.
    pub source_id: String,
    pub records: Vec<RawTermRecord>,
    /// Elements of the source that did not parse as records.
    pub rejected: Vec<SourceReadError>,
}

impl SourceBatch {
    pub fn new(source_id: impl Into<String>, records: Vec<RawTermRecord>) -> Self {
        Self {
            source_id: source_id.into(),
            records,
            rejected: Vec::new(),
        }
    }
}
