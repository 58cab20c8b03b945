use std::path::{Path, PathBuf};

use glossary_core::errors::SourceReadError;
use glossary_core::models::{RawTermRecord, SourceBatch};
use glossary_core::traits::ISourceLoader;
use serde_json::Value;
use tracing::{debug, warn};

/// Loads every `*.{extension}` file of a directory as one source batch.
///
/// Files are read in file-name order. Each file must hold a JSON array of
/// term records; elements that do not parse as records are rejected
/// individually and the rest of the file is kept.
#[derive(Debug, Clone)]
pub struct DirectorySourceLoader {
    dir: PathBuf,
    extension: String,
}

impl DirectorySourceLoader {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Matching files sorted by file name.
    pub fn source_files(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension)
            })
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl ISourceLoader for DirectorySourceLoader {
    fn load_sources(&self) -> Vec<Result<SourceBatch, SourceReadError>> {
        match self.source_files() {
            Ok(files) => {
                debug!(dir = %self.dir.display(), files = files.len(), "scanning source directory");
                files.iter().map(|path| read_source_file(path)).collect()
            }
            Err(err) => {
                warn!(dir = %self.dir.display(), error = %err, "source directory unreadable");
                vec![Err(SourceReadError::Io {
                    source_id: self.dir.display().to_string(),
                    message: err.to_string(),
                })]
            }
        }
    }
}

/// Source identifier of a file: its file name, or the full path if it has none.
pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one source file as a batch of records.
pub fn read_source_file(path: &Path) -> Result<SourceBatch, SourceReadError> {
    let source_id = source_id(path);
    let content = std::fs::read_to_string(path).map_err(|e| SourceReadError::Io {
        source_id: source_id.clone(),
        message: e.to_string(),
    })?;
    parse_source(&source_id, &content)
}

/// Parse the content of one source.
pub fn parse_source(source_id: &str, content: &str) -> Result<SourceBatch, SourceReadError> {
    let value: Value = serde_json::from_str(content).map_err(|e| SourceReadError::Parse {
        source_id: source_id.to_string(),
        message: e.to_string(),
    })?;
    let Value::Array(elements) = value else {
        return Err(SourceReadError::NotAnArray {
            source_id: source_id.to_string(),
        });
    };

    let mut batch = SourceBatch::new(source_id, Vec::with_capacity(elements.len()));
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RawTermRecord>(element) {
            Ok(record) => batch.records.push(record),
            Err(e) => batch.rejected.push(SourceReadError::InvalidRecord {
                source_id: source_id.to_string(),
                index,
                message: e.to_string(),
            }),
        }
    }
    debug!(
        source = source_id,
        records = batch.records.len(),
        rejected = batch.rejected.len(),
        "read source"
    );
    Ok(batch)
}
