use super::error_code::{self, GlossaryErrorCode};

/// Output sink failures. These are the only fatal errors of a merge run.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize glossary: {message}")]
    Serialize { message: String },

    #[error("refusing to overwrite existing output {path}")]
    AlreadyExists { path: String },
}

impl GlossaryErrorCode for SinkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::SINK_IO,
            Self::Serialize { .. } => error_code::SINK_SERIALIZE,
            Self::AlreadyExists { .. } => error_code::SINK_ALREADY_EXISTS,
        }
    }
}
