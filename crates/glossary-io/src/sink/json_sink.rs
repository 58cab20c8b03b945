use std::io::Write;
use std::path::{Path, PathBuf};

use glossary_core::config::OutputConfig;
use glossary_core::errors::SinkError;
use glossary_core::models::GlossaryDocument;
use glossary_core::traits::IOutputSink;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes the glossary as a JSON document, replacing the file atomically.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    overwrite: bool,
    pretty: bool,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overwrite: true,
            pretty: true,
        }
    }

    /// Sink at `path` honoring the overwrite and formatting settings of `config`.
    pub fn from_config(path: impl Into<PathBuf>, config: &OutputConfig) -> Self {
        Self {
            path: path.into(),
            overwrite: config.overwrite,
            pretty: config.pretty,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IOutputSink for JsonFileSink {
    fn write(&self, document: &GlossaryDocument) -> Result<(), SinkError> {
        if !self.overwrite && self.path.exists() {
            return Err(SinkError::AlreadyExists {
                path: self.path.display().to_string(),
            });
        }
        write_json_atomic(&self.path, document, self.pretty)?;
        info!(path = %self.path.display(), terms = document.terms.len(), "wrote glossary");
        Ok(())
    }
}

/// Serialize `value` as JSON with a trailing newline and write it atomically.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), SinkError> {
    let serialized = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let mut content = serialized.map_err(|e| SinkError::Serialize {
        message: e.to_string(),
    })?;
    content.push('\n');
    write_atomic(path, content.as_bytes())
}

/// Write `bytes` to a temp file next to `path`, then rename it into place.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SinkError> {
    let io_err = |source: std::io::Error| SinkError::Io {
        path: path.display().to_string(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
