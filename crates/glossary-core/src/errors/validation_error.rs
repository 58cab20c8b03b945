use super::error_code::{self, GlossaryErrorCode};

/// A merged term violates the canonical schema and was dropped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("term '{acronym}' is missing required field '{field}'")]
    MissingField { acronym: String, field: &'static str },

    #[error("term '{acronym}' field '{field}' is {length} characters, max {max}")]
    FieldTooLong {
        acronym: String,
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error("acronym '{acronym}' appears {count} times")]
    DuplicateAcronym { acronym: String, count: usize },
}

impl ValidationError {
    /// Acronym of the offending term (may be empty when that is the problem).
    pub fn acronym(&self) -> &str {
        match self {
            Self::MissingField { acronym, .. }
            | Self::FieldTooLong { acronym, .. }
            | Self::DuplicateAcronym { acronym, .. } => acronym,
        }
    }
}

impl GlossaryErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::VALIDATION_MISSING_FIELD,
            Self::FieldTooLong { .. } => error_code::VALIDATION_FIELD_TOO_LONG,
            Self::DuplicateAcronym { .. } => error_code::VALIDATION_DUPLICATE_ACRONYM,
        }
    }
}
