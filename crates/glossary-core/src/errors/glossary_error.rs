use super::{ConfigError, GlossaryErrorCode, SinkError, SourceReadError, ValidationError};

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("source error: {0}")]
    Source(#[from] SourceReadError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

impl GlossaryErrorCode for GlossaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Sink(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type GlossaryResult<T> = Result<T, GlossaryError>;
