use super::error_code::{self, GlossaryErrorCode};

/// A source (or the baseline) could not be read as a term record array.
///
/// Always recoverable: the aggregator skips the source and records a warning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceReadError {
    #[error("failed to read {source_id}: {message}")]
    Io { source_id: String, message: String },

    #[error("failed to parse {source_id}: {message}")]
    Parse { source_id: String, message: String },

    #[error("{source_id} is not a JSON array of term records")]
    NotAnArray { source_id: String },

    #[error("{source_id} record #{index} is not a valid term record: {message}")]
    InvalidRecord {
        source_id: String,
        index: usize,
        message: String,
    },
}

impl SourceReadError {
    /// Identifier of the source the error refers to.
    pub fn source_id(&self) -> &str {
        match self {
            Self::Io { source_id, .. }
            | Self::Parse { source_id, .. }
            | Self::NotAnArray { source_id }
            | Self::InvalidRecord { source_id, .. } => source_id,
        }
    }
}

impl GlossaryErrorCode for SourceReadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::SOURCE_IO,
            Self::Parse { .. } => error_code::SOURCE_PARSE,
            Self::NotAnArray { .. } => error_code::SOURCE_NOT_ARRAY,
            Self::InvalidRecord { .. } => error_code::SOURCE_INVALID_RECORD,
        }
    }
}
